//! Terminal rendering of the two views.

use crate::columns::{ACTIONS_LABEL, RACE_COLUMNS};
use crate::detail::{DetailView, Treatment};
use crate::list::ListView;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

pub const LOADING: &str = "Loading...";

/// The text of a row's "view" control.
pub fn view_control(id: &core_types::RecordId) -> String {
    format!("view {id}")
}

/// Builds the race table. Only the header is present unless a page loaded.
pub fn list_table(view: &ListView) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header: Vec<&str> = RACE_COLUMNS.iter().map(|column| column.label).collect();
    header.push(ACTIONS_LABEL);
    table.set_header(header);

    for row in view.rows() {
        let mut cells = row.cells;
        cells.push(view_control(&row.action.id));
        table.add_row(cells);
    }
    table
}

pub fn render_list(view: &ListView) -> String {
    let mut out = String::from("Races\n");
    if view.state().is_loading() {
        out.push_str(LOADING);
        out.push('\n');
        return out;
    }
    out.push_str(&list_table(view).to_string());
    out.push('\n');
    if let Some(footer) = view.footer() {
        out.push_str(&footer);
        out.push('\n');
    }
    out
}

pub fn render_detail(view: &DetailView) -> String {
    let mut out = String::from("Show Race\n");
    if view.state().is_loading() {
        out.push_str(LOADING);
        out.push('\n');
        return out;
    }
    for section in view.sections() {
        out.push('\n');
        out.push_str(section.label);
        out.push('\n');
        match section.treatment {
            Treatment::Plain => out.push_str(&section.value),
            Treatment::Tag => {
                out.push_str("[ ");
                out.push_str(&section.value);
                out.push_str(" ]");
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotifier;
    use api_client::testing::race;
    use core_types::{Page, RecordId};

    fn loaded_list() -> ListView {
        let mut view = ListView::default();
        let ticket = view.begin();
        let page = Page::new(vec![race("r1", "Elf", "Forest dweller", [3, 8, 7, 5])], 1);
        view.complete(ticket, Ok(page), &MemoryNotifier::new());
        view
    }

    #[test]
    fn table_has_six_data_columns_and_the_action_column() {
        let mut table = list_table(&loaded_list());

        assert_eq!(table.column_count(), 7);
        let rendered = table.to_string();
        for text in ["Name", "Willpower", "Actions", "Elf", "Forest dweller", "view r1"] {
            assert!(rendered.contains(text), "missing {text:?} in\n{rendered}");
        }
    }

    #[test]
    fn list_shows_loading_then_footer() {
        let mut view = ListView::default();
        view.begin();
        assert!(render_list(&view).contains(LOADING));

        let rendered = render_list(&loaded_list());
        assert!(!rendered.contains(LOADING));
        assert!(rendered.contains("Page 1 of 1 (1 records)"));
    }

    #[test]
    fn detail_renders_name_and_tag_and_nothing_else() {
        let mut view = DetailView::new();
        let ticket = view.begin(RecordId::from("r1"));
        view.complete(ticket, Ok(race("r1", "Elf", "Forest dweller", [3, 8, 7, 5])), &MemoryNotifier::new());

        assert_eq!(render_detail(&view), "Show Race\n\nName\nElf\n\nDescription\n[ Forest dweller ]\n");
    }

    #[test]
    fn failed_detail_renders_only_the_title() {
        let mut view = DetailView::new();
        let ticket = view.begin(RecordId::from("nope"));
        let error = api_client::error::ApiError::NotFound {
            resource: "races".to_string(),
            id: RecordId::from("nope"),
        };
        view.complete(ticket, Err(error), &MemoryNotifier::new());

        assert_eq!(render_detail(&view), "Show Race\n");
    }
}
