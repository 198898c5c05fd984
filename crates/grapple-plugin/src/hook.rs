//! What makes an item a grappling hook, and how it wears out.
//!
//! A grappling hook is any item carrying the riptide enchantment at level
//! above 0; the level doubles as the pull strength. Wear is tracked as a
//! fractional use counter persisted in the item's attachment store, so an
//! unbreaking level reduces the cost of each pull instead of randomly
//! skipping it.

use grapple_api::item::{enchantment_id, AttachmentValue, ItemKind, ItemStack};

use crate::config::GrappleConfig;

/// Attachment key for the accumulated-uses counter.
pub const USES_KEY: &str = "grappling:uses";

/// Whether this item works as a grappling hook.
pub fn is_grappling(item: &ItemStack) -> bool {
    item.enchantment_level(enchantment_id::RIPTIDE) > 0
}

/// Build a fresh grappling hook with the given enchantment levels.
///
/// Levels are taken as handed in; negative or oversized values are the
/// caller's business. A durability level of 0 (or less) leaves the
/// unbreaking enchantment off entirely.
pub fn build_hook(config: &GrappleConfig, force: i32, durability: i32) -> ItemStack {
    let mut item = ItemStack::new(ItemKind::FishingRod, 1);
    item.set_enchantment(enchantment_id::RIPTIDE, force as i16);
    if durability > 0 {
        item.set_enchantment(enchantment_id::UNBREAKING, durability as i16);
    }
    item.display_name = Some(config.name.clone());
    item.lore = config.lore.clone();
    item
}

/// Accumulated wear on one hook, loaded from and saved to the item's
/// attachment store at handler boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Wear {
    pub uses: f64,
}

impl Wear {
    /// Read the wear record off an item. `None` means the item has never
    /// been pulled with.
    pub fn load(item: &ItemStack) -> Option<Wear> {
        let uses = item.attachments.get(USES_KEY)?.as_double()?;
        Some(Wear { uses })
    }

    /// Write the wear record back onto the item.
    pub fn save(self, item: &mut ItemStack) {
        item.attachments
            .insert(USES_KEY.to_string(), AttachmentValue::Double(self.uses));
    }

    /// One pull's worth of wear: 1/(level+1), so each unbreaking level
    /// stretches the same budget over more pulls.
    pub fn advance(self, durability_level: i16) -> Wear {
        Wear {
            uses: self.uses + 1.0 / (f64::from(durability_level) + 1.0),
        }
    }

    /// Whether the hook has used up its configured budget.
    pub fn is_spent(self, max_uses: i32) -> bool {
        self.uses >= f64::from(max_uses)
    }

    /// Damage-bar position for this much wear: the use counter rescaled
    /// onto the item kind's durability range.
    pub fn damage_indicator(self, max_durability: u16, max_uses: i32) -> u16 {
        if max_uses <= 0 {
            return max_durability;
        }
        let scaled = (self.uses * f64::from(max_durability) / f64::from(max_uses)).round();
        scaled.clamp(0.0, f64::from(u16::MAX)) as u16
    }
}
