//! Observer: customers subscribe to an [`Item`] and get an email when it
//! comes back in stock.

use std::rc::Rc;

use tracing::debug;

pub trait Observer {
    fn update(&self, item_name: &str);

    /// Stable identifier; two observers with the same id are the same
    /// subscriber as far as the subject is concerned.
    fn id(&self) -> &str;
}

pub trait Subject {
    fn register(&mut self, observer: Rc<dyn Observer>);
    fn deregister(&mut self, observer: &dyn Observer);
    fn notify_all(&self);
}

/// A customer identified by e-mail address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    id: String,
}

impl Customer {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Observer for Customer {
    fn update(&self, item_name: &str) {
        println!("Sending email to customer {} for item {}", self.id, item_name);
    }

    fn id(&self) -> &str {
        &self.id
    }
}

pub struct Item {
    observers: Vec<Rc<dyn Observer>>,
    name: String,
    in_stock: bool,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            observers: Vec::new(),
            name: name.into(),
            in_stock: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_in_stock(&self) -> bool {
        self.in_stock
    }

    /// Ids of the current subscribers, in list order.
    pub fn observer_ids(&self) -> Vec<&str> {
        self.observers.iter().map(|o| o.id()).collect()
    }

    /// Marks the item as available and tells every subscriber.
    pub fn update_availability(&mut self) {
        println!("Item {} is now in stock", self.name);
        self.in_stock = true;
        self.notify_all();
    }
}

impl Subject for Item {
    fn register(&mut self, observer: Rc<dyn Observer>) {
        debug!(item = %self.name, observer = observer.id(), "observer registered");
        self.observers.push(observer);
    }

    // Order is not preserved: the match is swapped with the last entry.
    fn deregister(&mut self, observer: &dyn Observer) {
        let target = observer.id();
        if let Some(pos) = self.observers.iter().position(|o| o.id() == target) {
            self.observers.swap_remove(pos);
            debug!(item = %self.name, observer = target, "observer removed");
        }
    }

    fn notify_all(&self) {
        debug!(item = %self.name, count = self.observers.len(), "notifying observers");
        for observer in &self.observers {
            observer.update(&self.name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customers(ids: &[&str]) -> Item {
        let mut item = Item::new("Nike Shirt");
        for id in ids {
            item.register(Rc::new(Customer::new(*id)));
        }
        item
    }

    #[test]
    fn test_new_item_is_out_of_stock() {
        let item = Item::new("Nike Shirt");
        assert!(!item.is_in_stock());
        assert!(item.observer_ids().is_empty());
    }

    #[test]
    fn test_register_allows_duplicates() {
        let item = customers(&["a", "a"]);
        assert_eq!(item.observer_ids(), vec!["a", "a"]);
    }

    #[test]
    fn test_deregister_swaps_last_into_hole() {
        let mut item = customers(&["a", "b", "c", "d"]);
        item.deregister(&Customer::new("b"));
        assert_eq!(item.observer_ids(), vec!["a", "d", "c"]);
    }

    #[test]
    fn test_deregister_removes_first_match_only() {
        let mut item = customers(&["a", "b", "a"]);
        item.deregister(&Customer::new("a"));
        assert_eq!(item.observer_ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_deregister_unknown_is_noop() {
        let mut item = customers(&["a", "b"]);
        item.deregister(&Customer::new("z"));
        assert_eq!(item.observer_ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_update_availability_flips_stock() {
        let mut item = customers(&["abc@gmail.com"]);
        item.update_availability();
        assert!(item.is_in_stock());
    }
}
