use core_types::Race;

/// One data column of the race table: a header label, the field path it
/// shows, and the accessor that reads that field.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub label: &'static str,
    pub path: &'static str,
    pub cell: fn(&Race) -> String,
}

impl Column {
    pub fn value(&self, race: &Race) -> String {
        (self.cell)(race)
    }
}

/// Header of the trailing column holding the per-row "view" control.
pub const ACTIONS_LABEL: &str = "Actions";

/// The race table, in display order. Values are shown exactly as stored.
pub static RACE_COLUMNS: [Column; 6] = [
    Column {
        label: "Name",
        path: "name",
        cell: name,
    },
    Column {
        label: "Description",
        path: "description",
        cell: description,
    },
    Column {
        label: "Strength",
        path: "base_attributes.strength",
        cell: strength,
    },
    Column {
        label: "Agility",
        path: "base_attributes.agility",
        cell: agility,
    },
    Column {
        label: "Intelligence",
        path: "base_attributes.intelligence",
        cell: intelligence,
    },
    Column {
        label: "Willpower",
        path: "base_attributes.willpower",
        cell: willpower,
    },
];

fn name(race: &Race) -> String {
    race.name.clone()
}

fn description(race: &Race) -> String {
    race.description.clone()
}

fn strength(race: &Race) -> String {
    race.base_attributes.strength.to_string()
}

fn agility(race: &Race) -> String {
    race.base_attributes.agility.to_string()
}

fn intelligence(race: &Race) -> String {
    race.base_attributes.intelligence.to_string()
}

fn willpower(race: &Race) -> String {
    race.base_attributes.willpower.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_client::testing::race;

    #[test]
    fn columns_follow_the_fixed_order() {
        let paths: Vec<_> = RACE_COLUMNS.iter().map(|c| c.path).collect();
        assert_eq!(
            paths,
            [
                "name",
                "description",
                "base_attributes.strength",
                "base_attributes.agility",
                "base_attributes.intelligence",
                "base_attributes.willpower",
            ]
        );
    }

    #[test]
    fn cells_are_the_raw_field_values() {
        let elf = race("r1", "Elf", "Forest dweller", [3, 8, 7, 5]);
        let cells: Vec<_> = RACE_COLUMNS.iter().map(|c| c.value(&elf)).collect();
        assert_eq!(cells, ["Elf", "Forest dweller", "3", "8", "7", "5"]);
    }
}
