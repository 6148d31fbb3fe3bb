//! FAQ accordion over native `<details>` items.
//!
//! In the default mode the browser's own toggling is left alone. In
//! exclusive mode, opening one item closes every other open item.

#[derive(Debug)]
pub struct FaqAccordion {
    exclusive: bool,
    open: Vec<bool>,
}

impl FaqAccordion {
    #[must_use]
    pub fn new(exclusive: bool, initial_open: impl IntoIterator<Item = bool>) -> Self {
        Self {
            exclusive,
            open: initial_open.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.open.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    #[must_use]
    pub fn is_open(&self, index: usize) -> bool {
        self.open.get(index).copied().unwrap_or(false)
    }

    /// Record that item `index` toggled to `now_open`.
    ///
    /// Returns the indexes the host must close.
    pub fn on_toggle(&mut self, index: usize, now_open: bool) -> Vec<usize> {
        let Some(slot) = self.open.get_mut(index) else {
            return Vec::new();
        };
        *slot = now_open;
        if !self.exclusive || !now_open {
            return Vec::new();
        }
        let mut closed = Vec::new();
        for (i, open) in self.open.iter_mut().enumerate() {
            if i != index && *open {
                *open = false;
                closed.push(i);
            }
        }
        closed
    }
}
