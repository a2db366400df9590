use api_client::error::ApiError;

/// The render state of a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    /// Not mounted, or unmounted.
    Idle,
    /// A request is in flight; the view shows its loading affordance.
    Loading,
    Ready(T),
    /// The request failed; the view renders nothing from the record.
    Failed(ViewFailure),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&ViewFailure> {
        match self {
            ViewState::Failed(failure) => Some(failure),
            _ => None,
        }
    }
}

/// Coarse classification of a failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NetworkFailure,
    NotFound,
    MalformedResponse,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl From<&ApiError> for ViewFailure {
    fn from(error: &ApiError) -> Self {
        let kind = match error {
            ApiError::NotFound { .. } => FailureKind::NotFound,
            ApiError::MalformedResponse(_) => FailureKind::MalformedResponse,
            ApiError::Network(_)
            | ApiError::Status { .. }
            | ApiError::InvalidBaseUrl(_)
            | ApiError::ClientBuild(_) => FailureKind::NetworkFailure,
        };
        Self {
            kind,
            message: error.to_string(),
        }
    }
}

/// Identifies one mount of a view. A completion carrying an older ticket than
/// the view's current one belongs to a superseded request and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(pub(crate) u64);
