//! Built-in bot-list services
//!
//! One module per list, each exposing a `descriptor()` and the pure
//! `format` function behind it. The table below fixes the order
//! [`list_services`] reports them in.
//!
//! | Key | Aliases |
//! |-----|---------|
//! | `discordbotsgg` | discordbotsgg, discord.bots.gg |
//! | `discordbotsorg` | discordbotsorg, discordbots.org (deprecated) |
//! | `topgg` | topgg, top.gg |
//! | `botsfordiscord` | botsfordiscord, botsfordiscord.com |
//! | `botsondiscord` | botsondiscord, bots.ondiscord.xyz |
//! | `discordappsdev` | discordappsdev, discordapps.dev |
//! | `carbon` | carbon, carbonitex, carbonitex.net |
//! | `discordbotlist` | discordbotlist, discordbotlist.com |
//! | `divinediscordbots` | divinediscordbots, divinediscordbots.com |
//! | `discordboats` | discordboats, discord.boats |
//! | `botlistspace` | botlistspace, botlist.space |
//! | `discordbotworld` | discordbotworld, discordbot.world |
//! | `glennbotlist` | glennbotlist, glennbotlist.xyz |
//! | `spacebotslist` | spacebotslist, space-bot-list.xyz |

pub mod botlistspace;
pub mod botsfordiscord;
pub mod botsondiscord;
pub mod carbon;
pub mod custom;
pub mod discordappsdev;
pub mod discordboats;
pub mod discordbotlist;
pub mod discordbotsgg;
pub mod discordbotworld;
pub mod divinediscordbots;
pub mod glennbotlist;
pub mod helpers;
pub mod spacebotslist;
pub mod topgg;

use std::sync::{Arc, LazyLock};

use dbots_application::{PostFormatter, ServiceDescriptor, ServiceRegistry};
use dbots_domain::error::Result;

pub use custom::{AuthStyle, CustomServiceDefinition, build_custom_services};

static BUILTIN_REGISTRY: LazyLock<Arc<ServiceRegistry>> =
    LazyLock::new(|| Arc::new(ServiceRegistry::new(builtin_services())));

/// Fresh descriptors for every built-in list, in definition order
pub fn builtin_services() -> Vec<ServiceDescriptor> {
    let topgg_formatter: PostFormatter = Arc::new(topgg::format);

    vec![
        discordbotsgg::descriptor(),
        topgg::deprecated_descriptor(Arc::clone(&topgg_formatter)),
        topgg::descriptor(topgg_formatter),
        botsfordiscord::descriptor(),
        botsondiscord::descriptor(),
        discordappsdev::descriptor(),
        carbon::descriptor(),
        discordbotlist::descriptor(),
        divinediscordbots::descriptor(),
        discordboats::descriptor(),
        botlistspace::descriptor(),
        discordbotworld::descriptor(),
        glennbotlist::descriptor(),
        spacebotslist::descriptor(),
    ]
}

/// Process-wide registry of the built-in lists
pub fn builtin_registry() -> Arc<ServiceRegistry> {
    Arc::clone(&BUILTIN_REGISTRY)
}

/// Resolve a key against the built-ins, then `customs`
pub fn resolve_service<'a>(
    key: &str,
    customs: &'a [ServiceDescriptor],
) -> Option<&'a ServiceDescriptor> {
    BUILTIN_REGISTRY.resolve(key, customs)
}

/// Like [`resolve_service`], failing with `InvalidService` on an unknown key
pub fn get_service<'a>(
    key: &str,
    customs: &'a [ServiceDescriptor],
) -> Result<&'a ServiceDescriptor> {
    BUILTIN_REGISTRY.get_or_invalid(key, customs)
}

/// Every resolvable built-in, in definition order
pub fn list_services() -> Vec<&'static ServiceDescriptor> {
    BUILTIN_REGISTRY.list()
}
