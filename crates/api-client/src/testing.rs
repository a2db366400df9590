//! In-memory test doubles for code that depends on a `DataProvider`.

use crate::DataProvider;
use crate::error::ApiError;
use async_trait::async_trait;
use core_types::{BaseAttributes, Page, Pagination, Race, RecordId};
use serde::de::DeserializeOwned;
use std::sync::Mutex;

pub fn race(id: &str, name: &str, description: &str, [strength, agility, intelligence, willpower]: [u32; 4]) -> Race {
    Race {
        id: RecordId::from(id),
        name: name.to_string(),
        description: description.to_string(),
        base_attributes: BaseAttributes {
            strength,
            agility,
            intelligence,
            willpower,
        },
    }
}

/// An in-memory store that records every call made against it.
#[derive(Default)]
pub struct StubProvider {
    pub races: Vec<Race>,
    pub fail_lists: bool,
    pub list_calls: Mutex<Vec<Pagination>>,
    pub get_calls: Mutex<Vec<RecordId>>,
}

impl StubProvider {
    pub fn with(races: Vec<Race>) -> Self {
        Self {
            races,
            ..Default::default()
        }
    }

    fn convert<T: DeserializeOwned>(value: &Race) -> Result<T, ApiError> {
        let json = serde_json::to_value(value).map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        serde_json::from_value(json).map_err(|e| ApiError::MalformedResponse(e.to_string()))
    }
}

#[async_trait]
impl DataProvider for StubProvider {
    async fn get_list<T>(&self, _resource: &str, pagination: &Pagination) -> Result<Page<T>, ApiError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.list_calls.lock().unwrap().push(*pagination);
        if self.fail_lists {
            return Err(ApiError::Status {
                status: 500,
                body: "Unable to process your request right now.".to_string(),
            });
        }
        let start = pagination.start() as usize;
        let end = (pagination.end() as usize).min(self.races.len());
        let data = self
            .races
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(Self::convert)
            .collect::<Result<Vec<T>, _>>()?;
        Ok(Page::new(data, self.races.len() as u64))
    }

    async fn get_one<T>(&self, resource: &str, id: &RecordId) -> Result<T, ApiError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        self.get_calls.lock().unwrap().push(id.clone());
        match self.races.iter().find(|r| &r.id == id) {
            Some(race) => Self::convert(race),
            None => Err(ApiError::NotFound {
                resource: resource.to_string(),
                id: id.clone(),
            }),
        }
    }
}
