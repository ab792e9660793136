use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCheck, LdX};
use dioxus_free_icons::Icon;

/// One row of a [`Checklist`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChecklistItem {
    /// Stable key, also used to build the row's DOM id.
    pub key: String,
    pub label: String,
    pub met: bool,
}

impl ChecklistItem {
    pub fn new(key: impl Into<String>, label: impl Into<String>, met: bool) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            met,
        }
    }
}

/// Live list of rules with a met/unmet marker per row.
///
/// Rows expose `data-state="met"` or `data-state="unmet"` for styling.
#[component]
pub fn Checklist(
    items: Vec<ChecklistItem>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![
        Attribute::new("class", "checklist", None, false),
        Attribute::new("aria-live", "polite", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        ul {
            ..merged,
            for item in items {
                li {
                    key: "{item.key}",
                    id: "checklist-{item.key}",
                    class: "checklist-item",
                    "data-state": if item.met { "met" } else { "unmet" },
                    if item.met {
                        Icon { icon: LdCheck, width: 14, height: 14 }
                    } else {
                        Icon { icon: LdX, width: 14, height: 14 }
                    }
                    span { class: "checklist-label", "{item.label}" }
                }
            }
        }
    }
}
