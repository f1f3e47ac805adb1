//! Technology Tags
//!
//! Row of labeled tags, one per technology, in the order given.

use dioxus::prelude::*;

#[derive(Clone, PartialEq, Props)]
pub struct TechTagsProps {
    /// Technology names in presentation order
    pub tags: Vec<String>,
}

/// # Example
///
/// ```rust,ignore
/// rsx! {
///     TechTags { tags: project.technologies.clone() }
/// }
/// ```
#[component]
pub fn TechTags(props: TechTagsProps) -> Element {
    if props.tags.is_empty() {
        return VNode::empty();
    }

    rsx! {
        ul { class: "project-tech",
            for (i, tag) in props.tags.iter().enumerate() {
                li {
                    key: "{i}-{tag}",
                    class: "tech-tag",
                    "{tag}"
                }
            }
        }
    }
}
