//! A grappling hook plugin: riptide-enchanted fishing rods pull their
//! wielder toward wherever the hook lands.
//!
//! The plugin reacts to three things: fishing-hook state changes (the pull
//! itself), fall damage (softened while holding a hook), and the
//! `grappling give` command. All server access goes through the [`Host`]
//! capabilities passed into each callback; the only state the plugin keeps
//! is its configuration, loaded once at enable time.

pub mod command;
pub mod config;
pub mod hook;
pub mod pull;

use grapple_api::item::enchantment_id;
use grapple_api::math::Vec3;
use grapple_api::{
    DamageCause, EventResult, GameEvent, Host, HookState, Player, Plugin, PluginInfo, Victim,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::GrappleConfig;
use crate::hook::Wear;

pub const PLUGIN_NAME: &str = "Grappling";

const COMMAND: &str = "grappling";

/// Marketplace resource id, for the host's update check.
const UPDATE_RESOURCE_ID: u32 = 71_059;

/// Why a handler declined an event. The display string is the short
/// reason reported in debug logs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    /// Sneaking players are deliberately opting out of the pull.
    #[error("Invalid")]
    Sneaking,
    /// The hook is not in a state that can anchor a pull.
    #[error("Wrong state")]
    WrongState,
    /// Main hand is empty or holds something that is not a grappling hook.
    #[error("Wrong item")]
    WrongItem,
    /// A use permission is configured and the player lacks it.
    #[error("No permission")]
    NoPermission,
    /// Hook and player occupy the same spot, leaving no pull direction.
    #[error("Invalid")]
    NoDirection,
    /// Damage from something other than a fall.
    #[error("Invalid")]
    WrongCause,
    /// Fall damage on something other than a player.
    #[error("Invalid")]
    NotAPlayer,
}

pub struct GrapplingPlugin {
    config: GrappleConfig,
}

impl GrapplingPlugin {
    pub fn new() -> Self {
        Self {
            config: GrappleConfig::default(),
        }
    }

    pub fn with_config(config: GrappleConfig) -> Self {
        Self { config }
    }

    /// The pull: guards in order, then velocity, then wear.
    fn handle_fish(
        &self,
        player: &Player,
        hook_pos: Vec3,
        state: HookState,
        host: &mut dyn Host,
    ) -> Result<(), Rejection> {
        if player.sneaking {
            return Err(Rejection::Sneaking);
        }
        if !matches!(state, HookState::InGround | HookState::FailedAttempt) {
            return Err(Rejection::WrongState);
        }
        let mut item = match host.main_hand(&player.name) {
            Some(item) => item,
            None => return Err(Rejection::WrongItem),
        };
        if !hook::is_grappling(&item) {
            return Err(Rejection::WrongItem);
        }
        let node = &self.config.use_permission;
        if !node.is_empty() && !host.has_permission(&player.name, node) {
            return Err(Rejection::NoPermission);
        }

        let direction = match pull::pull_direction(player.position, hook_pos) {
            Some(direction) => direction,
            None => return Err(Rejection::NoDirection),
        };
        let force = self.config.force * f32::from(item.enchantment_level(enchantment_id::RIPTIDE));
        host.set_velocity(
            &player.name,
            pull::pull_velocity(player.velocity, direction, force),
        );
        host.clear_fall_distance(&player.name);

        let wear = Wear::load(&item)
            .unwrap_or_default()
            .advance(item.enchantment_level(enchantment_id::UNBREAKING));
        item.damage = wear.damage_indicator(item.kind.max_durability(), self.config.durability);
        if wear.is_spent(self.config.durability) {
            item.count = 0;
        }
        wear.save(&mut item);
        host.set_main_hand(&player.name, item);
        host.refresh_inventory(&player.name);
        Ok(())
    }

    /// Fall-damage softening for hook holders. Returns the replacement
    /// damage value.
    fn handle_fall(
        &self,
        victim: &Victim,
        cause: DamageCause,
        host: &mut dyn Host,
    ) -> Result<f32, Rejection> {
        if cause != DamageCause::Fall {
            return Err(Rejection::WrongCause);
        }
        let player = match victim {
            Victim::Player(player) => player,
            Victim::Mob { .. } => return Err(Rejection::NotAPlayer),
        };
        let item = match host.main_hand(&player.name) {
            Some(item) => item,
            None => return Err(Rejection::WrongItem),
        };
        if !hook::is_grappling(&item) {
            return Err(Rejection::WrongItem);
        }
        Ok(player.fall_distance / self.config.fall_damage_reduction)
    }

    fn log_rejection(&self, context: &str, rejection: &Rejection) {
        if self.config.debug {
            debug!("grappling {} handler rejected event: {}", context, rejection);
        }
    }
}

impl Default for GrapplingPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for GrapplingPlugin {
    fn info(&self) -> PluginInfo {
        PluginInfo {
            name: PLUGIN_NAME.into(),
            version: env!("CARGO_PKG_VERSION").into(),
            description: "Turns a riptide-enchanted fishing rod into a grappling hook".into(),
            author: "grapple".into(),
        }
    }

    fn on_enable(&mut self, host: &mut dyn Host) {
        host.register_command(COMMAND, "Give out grappling hooks", PLUGIN_NAME);
        host.check_for_updates(UPDATE_RESOURCE_ID);
        info!("{} v{} enabled", PLUGIN_NAME, env!("CARGO_PKG_VERSION"));
    }

    fn on_event(&mut self, event: &mut GameEvent, host: &mut dyn Host) -> EventResult {
        match event {
            GameEvent::PlayerFish {
                player,
                hook,
                state,
            } => match self.handle_fish(player, *hook, *state, host) {
                Ok(()) => EventResult::Cancelled,
                Err(rejection) => {
                    self.log_rejection("pull", &rejection);
                    EventResult::Continue
                }
            },
            GameEvent::EntityDamage {
                victim,
                cause,
                damage,
            } => {
                match self.handle_fall(victim, *cause, host) {
                    Ok(reduced) => *damage = reduced,
                    Err(rejection) => self.log_rejection("fall", &rejection),
                }
                EventResult::Continue
            }
            _ => EventResult::Continue,
        }
    }

    fn on_command(
        &mut self,
        command: &str,
        args: &[String],
        sender: &str,
        host: &mut dyn Host,
    ) -> Option<String> {
        if command != COMMAND {
            return None;
        }
        Some(match command::run(&self.config, args, sender, host) {
            Ok(reply) => reply,
            Err(err) => err.to_string(),
        })
    }

    fn default_config(&self) -> Option<serde_json::Value> {
        serde_json::to_value(GrappleConfig::default()).ok()
    }

    fn load_config(&mut self, config: serde_json::Value) {
        match serde_json::from_value(config) {
            Ok(parsed) => self.config = parsed,
            Err(err) => warn!("Invalid grappling config, keeping defaults: {}", err),
        }
    }
}
