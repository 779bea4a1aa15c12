//! Initial data for a fresh store
//!
//! Seeding is idempotent: records that already exist (by username or
//! command name) are left alone.

use tracing::{info, instrument};

use merlin_core::entities::{NewCommand, NewUser};
use merlin_core::traits::{CommandRepository, RepoResult, UserRepository};

/// Built-in command catalog: name, category, description, usage
pub const DEFAULT_COMMANDS: [(&str, &str, &str, &str); 5] = [
    (
        "ban",
        "moderation",
        "Kullanıcıyı sunucudan yasaklar",
        "/ban @kullanıcı [sebep]",
    ),
    (
        "kick",
        "moderation",
        "Kullanıcıyı sunucudan atar",
        "/kick @kullanıcı [sebep]",
    ),
    (
        "clear",
        "moderation",
        "Belirli sayıda mesajı siler",
        "/clear [sayı]",
    ),
    (
        "anti-spam",
        "guard",
        "Spam korumasını yapılandırır",
        "/anti-spam [seviye]",
    ),
    (
        "anti-raid",
        "guard",
        "Raid korumasını yapılandırır",
        "/anti-raid [seviye]",
    ),
];

/// What a seeding run actually inserted
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedSummary {
    pub admin_created: bool,
    pub commands_created: usize,
}

/// Insert the admin account and the default command catalog
///
/// `admin` must already carry a password hash. The account is flagged as
/// admin whether or not it was created by this run.
#[instrument(skip_all, fields(admin = %admin.username))]
pub async fn seed_initial_data(
    users: &dyn UserRepository,
    commands: &dyn CommandRepository,
    admin: NewUser,
) -> RepoResult<SeedSummary> {
    let mut summary = SeedSummary::default();

    let admin_id = match users.find_by_username(&admin.username).await? {
        Some(existing) => existing.id,
        None => {
            summary.admin_created = true;
            users.create(admin).await?.id
        }
    };
    users.set_admin(admin_id, true).await?;

    for (name, category, description, usage) in DEFAULT_COMMANDS {
        if commands.find_by_name(name).await?.is_none() {
            commands
                .create(NewCommand::new(name, category, description, usage))
                .await?;
            summary.commands_created += 1;
        }
    }

    info!(
        admin_created = summary.admin_created,
        commands_created = summary.commands_created,
        "Seeded initial data"
    );

    Ok(summary)
}
