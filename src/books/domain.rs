use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Book: Identifiable {
    fn title(&self) -> &str;
    fn is_available(&self) -> bool;

    // case-insensitive substring match on the title; an empty fragment matches every book
    fn title_contains(&self, fragment: &str) -> bool {
        self.title().to_lowercase().contains(fragment.to_lowercase().as_str())
    }
}
