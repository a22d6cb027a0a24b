//! FAQ accordion state: at most one answer open.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FaqState {
    pub open: Option<usize>,
}

impl FaqState {
    /// Open `index`, or close it if it is already the open item.
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}
