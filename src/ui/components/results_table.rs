use dioxus::prelude::*;

use crate::directory::Person;
use crate::search;

/// Current page of the filtered directory. Always rendered, possibly with
/// an empty body; rows are keyed by record id.
#[component]
pub fn ResultsTable(rows: Vec<Person>, page: usize) -> Element {
    rsx! {
        table { class: "results-table",
            thead {
                tr {
                    th { "Sr. No." }
                    th { "Name" }
                    th { "Email" }
                }
            }
            tbody {
                for (index, person) in rows.iter().enumerate() {
                    tr { key: "{person.id}",
                        td { "{search::row_number(page, index)}" }
                        td { "{person.name}" }
                        td { "{person.email}" }
                    }
                }
            }
        }
    }
}
