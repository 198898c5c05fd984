//! Plugin API: traits, events, and host capabilities for plugin authors.
//!
//! This crate defines the contract between a hosting server and its
//! gameplay plugins. It has no dependency on any server internals; hosts
//! adapt their own state to these types at the callback boundary.

pub mod item;
pub mod math;

use item::ItemStack;
use math::Vec3;

// ─── Types ───────────────────────────────────────────────────────────────────

/// Snapshot of an online player, passed to plugins in events.
///
/// Fields are copies taken when the event fired; all mutation goes through
/// [`Host`].
#[derive(Debug, Clone)]
pub struct Player {
    pub name: String,
    pub position: Vec3,
    pub velocity: Vec3,
    pub sneaking: bool,
    /// Blocks fallen since the player last stood on solid ground.
    pub fall_distance: f32,
}

/// Cause of damage for EntityDamage events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageCause {
    Attack,
    Fall,
    Drowning,
    Lava,
    Fire,
    Suffocation,
    Starvation,
    Void,
    Other,
}

/// The entity on the receiving end of a damage event.
#[derive(Debug, Clone)]
pub enum Victim {
    Player(Player),
    Mob { runtime_id: u64 },
}

/// State of a cast fishing hook, reported on every state change of the
/// hook entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookState {
    /// Line is out, nothing has happened yet.
    Fishing,
    /// A fish was caught and is being reeled in.
    CaughtFish,
    /// The hook latched onto an entity.
    CaughtEntity,
    /// The hook is stuck in the ground.
    InGround,
    /// The line was reeled in with nothing on it.
    FailedAttempt,
    /// The line was reeled in while a fish was biting.
    ReelIn,
    /// A fish is biting the hook.
    Bite,
}

/// Result of dispatching an event to a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue normal handling.
    Continue,
    /// Event was cancelled by this plugin.
    Cancelled,
}

// ─── Events ──────────────────────────────────────────────────────────────────

/// All events that plugins can listen to.
///
/// Events are handed to plugins mutably: a handler may rewrite fields such
/// as the damage value of [`GameEvent::EntityDamage`] in place, and the
/// host applies whatever is left in the event after dispatch.
#[derive(Debug, Clone)]
pub enum GameEvent {
    PlayerJoin {
        player: Player,
    },
    PlayerQuit {
        player: Player,
    },
    /// A cast fishing hook changed state. `hook` is the hook entity's
    /// position at the time of the change.
    PlayerFish {
        player: Player,
        hook: Vec3,
        state: HookState,
    },
    EntityDamage {
        victim: Victim,
        cause: DamageCause,
        damage: f32,
    },
}

impl GameEvent {
    /// Whether this event type can be cancelled by a plugin.
    pub fn is_cancellable(&self) -> bool {
        matches!(
            self,
            GameEvent::PlayerFish { .. } | GameEvent::EntityDamage { .. }
        )
    }
}

// ─── Plugin trait ────────────────────────────────────────────────────────────

/// Metadata about a plugin.
#[derive(Debug, Clone)]
pub struct PluginInfo {
    pub name: String,
    pub version: String,
    pub description: String,
    pub author: String,
}

/// The Plugin trait: implemented by gameplay plugins loaded into the host.
pub trait Plugin: Send {
    /// Return plugin metadata.
    fn info(&self) -> PluginInfo;

    /// Called when the plugin is loaded. Use `host` to register commands.
    fn on_enable(&mut self, host: &mut dyn Host);

    /// Called when the plugin is unloaded.
    fn on_disable(&mut self) {}

    /// Called for every dispatched event. Return `Cancelled` to cancel
    /// cancellable events; field rewrites on the event survive the call.
    fn on_event(&mut self, event: &mut GameEvent, host: &mut dyn Host) -> EventResult {
        let _ = (event, host);
        EventResult::Continue
    }

    /// Called when a plugin-registered command is executed. Return a
    /// response message for the sender.
    fn on_command(
        &mut self,
        command: &str,
        args: &[String],
        sender: &str,
        host: &mut dyn Host,
    ) -> Option<String> {
        let _ = (command, args, sender, host);
        None
    }

    /// Return a default config as JSON. If `Some`, the plugin gets a config file.
    fn default_config(&self) -> Option<serde_json::Value> {
        None
    }

    /// Called with the loaded config (from `plugins/<name>/config.json`).
    fn load_config(&mut self, _config: serde_json::Value) {}
}

// ─── Host capabilities ───────────────────────────────────────────────────────

/// Safe read/write access to server state, passed to plugins during callbacks.
///
/// Read methods return data immediately. Write methods are deferred (applied
/// after the plugin callback returns).
pub trait Host {
    // --- Players ---
    fn online_players(&self) -> Vec<Player>;
    fn has_permission(&self, player_name: &str, node: &str) -> bool;
    fn send_message(&mut self, player_name: &str, message: &str);
    fn set_velocity(&mut self, player_name: &str, velocity: Vec3);
    /// Zero the player's accumulated fall distance.
    fn clear_fall_distance(&mut self, player_name: &str);

    // --- Inventory ---
    /// Copy of the item in the player's main hand, `None` if the player is
    /// not online.
    fn main_hand(&self, player_name: &str) -> Option<ItemStack>;
    fn set_main_hand(&mut self, player_name: &str, item: ItemStack);
    /// Resync the player's inventory to their client.
    fn refresh_inventory(&mut self, player_name: &str);
    fn give_item(&mut self, player_name: &str, item: ItemStack);

    // --- Plugin services ---
    fn register_command(&mut self, name: &str, description: &str, plugin_name: &str);
    /// Fire-and-forget version check against the host's plugin marketplace.
    fn check_for_updates(&mut self, resource_id: u32);
}

// ─── Tests ───────────────────────────────────────────────────────────────────
