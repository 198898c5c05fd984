//! Item model: stacks, enchantments, and per-item attachments.
//!
//! Hosts map their own inventory representation onto these types at the
//! plugin boundary. Attachments are the host's persistent per-item
//! key-value store; an entry lives exactly as long as the item instance.

use std::collections::BTreeMap;

/// Base item types plugins can construct or inspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    /// Empty slot.
    Air,
    FishingRod,
    Bow,
    Stick,
}

impl ItemKind {
    /// Durability points before the item breaks. 0 = not damageable.
    pub fn max_durability(self) -> u16 {
        match self {
            ItemKind::FishingRod => 64,
            ItemKind::Bow => 384,
            ItemKind::Air | ItemKind::Stick => 0,
        }
    }
}

/// A single enchantment on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Enchantment {
    /// Enchantment ID from the host's enchantment table.
    pub id: i16,
    /// Enchantment level.
    pub level: i16,
}

/// Well-known enchantment IDs from the host's enchantment table.
pub mod enchantment_id {
    /// Propels the wielder when triggered.
    pub const RIPTIDE: i16 = 30;
    /// Chance to skip durability loss on use.
    pub const UNBREAKING: i16 = 17;
}

/// Value stored in an item's persistent key-value attachment store.
#[derive(Debug, Clone, PartialEq)]
pub enum AttachmentValue {
    Double(f64),
    Long(i64),
    String(String),
}

impl AttachmentValue {
    pub fn as_double(&self) -> Option<f64> {
        match self {
            AttachmentValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match self {
            AttachmentValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&str> {
        match self {
            AttachmentValue::String(v) => Some(v),
            _ => None,
        }
    }
}

/// A single item stack in a player inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemStack {
    /// Base item type. `Air` means the slot is empty.
    pub kind: ItemKind,
    /// Number of items in this stack (1-255 in practice).
    pub count: u16,
    /// Wear shown on the durability bar. 0 = pristine.
    pub damage: u16,
    /// Custom display name, if any.
    pub display_name: Option<String>,
    /// Lore lines shown under the name.
    pub lore: Vec<String>,
    /// Enchantments on this item.
    pub enchantments: Vec<Enchantment>,
    /// Persistent per-item store. Keys are namespaced `plugin:entry`
    /// strings.
    pub attachments: BTreeMap<String, AttachmentValue>,
}

impl ItemStack {
    /// An empty slot.
    pub fn empty() -> Self {
        Self {
            kind: ItemKind::Air,
            count: 0,
            damage: 0,
            display_name: None,
            lore: Vec::new(),
            enchantments: Vec::new(),
            attachments: BTreeMap::new(),
        }
    }

    /// Create a plain stack with no enchantments or attachments.
    pub fn new(kind: ItemKind, count: u16) -> Self {
        Self {
            kind,
            count,
            damage: 0,
            display_name: None,
            lore: Vec::new(),
            enchantments: Vec::new(),
            attachments: BTreeMap::new(),
        }
    }

    /// Whether this slot is empty.
    pub fn is_empty(&self) -> bool {
        self.kind == ItemKind::Air || self.count == 0
    }

    /// Total level of the given enchantment, 0 if absent.
    pub fn enchantment_level(&self, id: i16) -> i16 {
        self.enchantments
            .iter()
            .filter(|e| e.id == id)
            .map(|e| e.level)
            .sum()
    }

    /// Set an enchantment, replacing any existing entry with the same ID.
    pub fn set_enchantment(&mut self, id: i16, level: i16) {
        match self.enchantments.iter_mut().find(|e| e.id == id) {
            Some(existing) => existing.level = level,
            None => self.enchantments.push(Enchantment { id, level }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_empty_checks() {
        assert!(ItemStack::empty().is_empty());
        assert!(ItemStack::new(ItemKind::Air, 10).is_empty());
        assert!(ItemStack::new(ItemKind::Stick, 0).is_empty());
        assert!(!ItemStack::new(ItemKind::Stick, 1).is_empty());
    }

    #[test]
    fn new_constructor() {
        let item = ItemStack::new(ItemKind::FishingRod, 1);
        assert_eq!(item.kind, ItemKind::FishingRod);
        assert_eq!(item.count, 1);
        assert_eq!(item.damage, 0);
        assert!(item.display_name.is_none());
        assert!(item.enchantments.is_empty());
        assert!(item.attachments.is_empty());
    }

    #[test]
    fn enchantment_level_absent_is_zero() {
        let item = ItemStack::new(ItemKind::FishingRod, 1);
        assert_eq!(item.enchantment_level(enchantment_id::RIPTIDE), 0);
    }

    #[test]
    fn enchantment_level_reads_back() {
        let mut item = ItemStack::new(ItemKind::FishingRod, 1);
        item.set_enchantment(enchantment_id::RIPTIDE, 3);
        item.set_enchantment(enchantment_id::UNBREAKING, 2);
        assert_eq!(item.enchantment_level(enchantment_id::RIPTIDE), 3);
        assert_eq!(item.enchantment_level(enchantment_id::UNBREAKING), 2);
    }

    #[test]
    fn set_enchantment_replaces_existing() {
        let mut item = ItemStack::new(ItemKind::Bow, 1);
        item.set_enchantment(enchantment_id::UNBREAKING, 1);
        item.set_enchantment(enchantment_id::UNBREAKING, 4);
        assert_eq!(item.enchantments.len(), 1);
        assert_eq!(item.enchantment_level(enchantment_id::UNBREAKING), 4);
    }

    #[test]
    fn duplicate_entries_sum_levels() {
        let mut item = ItemStack::new(ItemKind::FishingRod, 1);
        item.enchantments.push(Enchantment {
            id: enchantment_id::RIPTIDE,
            level: 1,
        });
        item.enchantments.push(Enchantment {
            id: enchantment_id::RIPTIDE,
            level: 2,
        });
        assert_eq!(item.enchantment_level(enchantment_id::RIPTIDE), 3);
    }

    #[test]
    fn attachment_typed_getters() {
        let mut item = ItemStack::new(ItemKind::FishingRod, 1);
        item.attachments
            .insert("demo:uses".into(), AttachmentValue::Double(1.5));
        item.attachments
            .insert("demo:owner".into(), AttachmentValue::String("Alice".into()));

        let uses = item.attachments.get("demo:uses").unwrap();
        assert_eq!(uses.as_double(), Some(1.5));
        assert_eq!(uses.as_long(), None);
        assert_eq!(uses.as_string(), None);

        let owner = item.attachments.get("demo:owner").unwrap();
        assert_eq!(owner.as_string(), Some("Alice"));
        assert!(item.attachments.get("demo:missing").is_none());
    }

    #[test]
    fn max_durability_by_kind() {
        assert_eq!(ItemKind::FishingRod.max_durability(), 64);
        assert_eq!(ItemKind::Bow.max_durability(), 384);
        assert_eq!(ItemKind::Stick.max_durability(), 0);
    }
}
