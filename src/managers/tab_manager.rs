use std::collections::{HashMap, HashSet};

use crate::types::errors::TabError;
use crate::types::office_app::OfficeApp;
use crate::types::tab::{TabId, TabRecord};

/// Trait defining the tab bookkeeping interface.
pub trait TabManagerTrait {
    type Surface;

    fn append(&mut self, record: TabRecord<Self::Surface>) -> Result<TabId, TabError>;
    fn select(&mut self, tab_id: &TabId) -> Result<(), TabError>;
    fn close(&mut self, tab_id: &TabId) -> Result<TabRecord<Self::Surface>, TabError>;
    fn register_named(&mut self, app: OfficeApp, tab_id: &TabId) -> Result<(), TabError>;
    fn named(&self, app: OfficeApp) -> Option<&TabId>;
    fn forget_named(&mut self, app: OfficeApp) -> Option<TabId>;
    fn get(&self, tab_id: &TabId) -> Option<&TabRecord<Self::Surface>>;
    fn get_mut(&mut self, tab_id: &TabId) -> Option<&mut TabRecord<Self::Surface>>;
    fn selected_id(&self) -> Option<&TabId>;
    fn selected(&self) -> Option<&TabRecord<Self::Surface>>;
    fn tabs(&self) -> Vec<&TabRecord<Self::Surface>>;
    fn tab_order(&self) -> &[TabId];
    fn open_apps(&self) -> HashSet<OfficeApp>;
    fn tab_count(&self) -> usize;
}

/// In-memory tab bookkeeping: the all-tabs table, the named-app table,
/// tab order and the selected tab.
pub struct TabManager<S> {
    records: HashMap<TabId, TabRecord<S>>,
    named: HashMap<OfficeApp, TabId>,
    tab_order: Vec<TabId>,
    selected: Option<TabId>,
}

impl<S> TabManager<S> {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
            named: HashMap::new(),
            tab_order: Vec::new(),
            selected: None,
        }
    }

    fn find_order_index(&self, tab_id: &TabId) -> Option<usize> {
        self.tab_order.iter().position(|id| id == tab_id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops a record while leaving its named registration behind, the way a
    /// page torn down underneath the controller would.
    #[cfg(test)]
    pub(crate) fn discard_record(&mut self, tab_id: &TabId) {
        self.records.remove(tab_id);
        self.tab_order.retain(|id| id != tab_id);
        if self.selected.as_ref() == Some(tab_id) {
            self.selected = self.tab_order.first().cloned();
        }
    }
}

impl<S> Default for TabManager<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> TabManagerTrait for TabManager<S> {
    type Surface = S;

    /// Add a tab at the end of the order. Selection is left untouched.
    fn append(&mut self, record: TabRecord<S>) -> Result<TabId, TabError> {
        let id = record.id.clone();
        if self.records.contains_key(&id) {
            return Err(TabError::AlreadyExists(id));
        }
        self.records.insert(id.clone(), record);
        self.tab_order.push(id.clone());
        Ok(id)
    }

    fn select(&mut self, tab_id: &TabId) -> Result<(), TabError> {
        if !self.records.contains_key(tab_id) {
            return Err(TabError::NotFound(tab_id.clone()));
        }
        self.selected = Some(tab_id.clone());
        Ok(())
    }

    /// Remove a tab from every table. If it was selected, the tab that slides
    /// into its position becomes selected, else the new last tab.
    fn close(&mut self, tab_id: &TabId) -> Result<TabRecord<S>, TabError> {
        let order_idx = self
            .find_order_index(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.clone()))?;
        let record = self
            .records
            .remove(tab_id)
            .ok_or_else(|| TabError::NotFound(tab_id.clone()))?;

        self.tab_order.remove(order_idx);
        self.named.retain(|_, id| id != tab_id);

        if self.selected.as_ref() == Some(tab_id) {
            self.selected = if self.tab_order.is_empty() {
                None
            } else {
                let next = order_idx.min(self.tab_order.len() - 1);
                Some(self.tab_order[next].clone())
            };
        }

        Ok(record)
    }

    /// Register `tab_id` as the tab for `app`, replacing any earlier one.
    fn register_named(&mut self, app: OfficeApp, tab_id: &TabId) -> Result<(), TabError> {
        if !self.records.contains_key(tab_id) {
            return Err(TabError::NotFound(tab_id.clone()));
        }
        self.named.insert(app, tab_id.clone());
        Ok(())
    }

    fn named(&self, app: OfficeApp) -> Option<&TabId> {
        self.named.get(&app)
    }

    fn forget_named(&mut self, app: OfficeApp) -> Option<TabId> {
        self.named.remove(&app)
    }

    fn get(&self, tab_id: &TabId) -> Option<&TabRecord<S>> {
        self.records.get(tab_id)
    }

    fn get_mut(&mut self, tab_id: &TabId) -> Option<&mut TabRecord<S>> {
        self.records.get_mut(tab_id)
    }

    fn selected_id(&self) -> Option<&TabId> {
        self.selected.as_ref()
    }

    fn selected(&self) -> Option<&TabRecord<S>> {
        self.selected.as_ref().and_then(|id| self.records.get(id))
    }

    fn tabs(&self) -> Vec<&TabRecord<S>> {
        self.tab_order
            .iter()
            .filter_map(|id| self.records.get(id))
            .collect()
    }

    fn tab_order(&self) -> &[TabId] {
        &self.tab_order
    }

    /// Apps with at least one open tab, whether or not it is registered.
    fn open_apps(&self) -> HashSet<OfficeApp> {
        self.records.values().filter_map(|r| r.tracked).collect()
    }

    fn tab_count(&self) -> usize {
        self.records.len()
    }
}
