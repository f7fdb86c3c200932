use crate::item_commands::{MediaCommands, ShopCommands, SpotlightCommands};
use crate::link_commands::LinkCommands;
use crate::{CliError, Commands, Result as CliResult};

use bio_core::{Identity, MediaItem, ShopItem, SocialLink, SpotlightItem};
use bio_editor::{
    IdentityProvider, ProfileFields, ProfileSession, SessionOptions, StaticIdentityProvider, Update,
    ValidationIssue,
};
use bio_store::{KeyValueStore, ProfileRecords, ProfileRepository};

use log::info;
use serde_json::{Value, json};
use uuid::Uuid;

/// Runs one command against `repo` for `identity` and returns its JSON output.
///
/// Mutating commands enter edit mode, apply one update and save; a failed
/// save is returned as an error.
pub fn run<S: KeyValueStore>(
    command: Commands,
    repo: ProfileRepository<S>,
    identity: Option<Identity>,
    options: SessionOptions,
) -> CliResult<Value> {
    match command {
        Commands::Identities => {
            return list_identities(&repo, &StaticIdentityProvider::new(identity));
        }
        Commands::Reset { all } => return reset(repo, identity, all),
        _ => {}
    }

    let mut session = ProfileSession::open(repo, identity, options);

    let issues = match command {
        Commands::Show => Vec::new(),
        Commands::Edit {
            name,
            title,
            bio,
            image,
            wallet,
            show_wallet,
            btc,
            show_btc,
        } => mutate(&mut session, |records| {
            let mut fields = ProfileFields::from(&records.profile);
            set_if_some(&mut fields.display_name, name);
            set_if_some(&mut fields.title, title);
            set_if_some(&mut fields.bio, bio);
            set_if_some(&mut fields.image_ref, image);
            set_if_some(&mut fields.wallet_address, wallet);
            set_if_some(&mut fields.show_wallet_address, show_wallet);
            set_if_some(&mut fields.btc_address, btc);
            set_if_some(&mut fields.show_btc_address, show_btc);
            Ok(Update::ProfileFields(fields))
        })?,
        Commands::Link { action } => mutate(&mut session, |records| {
            let mut links = records.profile.social_links.clone();
            match action {
                LinkCommands::Add { platform, url } => {
                    let existing = links.iter().position(|l| l.platform == platform);
                    match existing {
                        Some(i) => links[i].url = url,
                        None => links.push(SocialLink::new(platform, url)),
                    }
                }
                LinkCommands::Remove { platform } => {
                    let before = links.len();
                    links.retain(|l| l.platform != platform);
                    if links.len() == before {
                        return Err(invalid(format!("No link for platform {platform}")));
                    }
                }
            }
            Ok(Update::SocialLinks(links))
        })?,
        Commands::Section {
            spotlight,
            media,
            shop,
            sticker,
        } => mutate(&mut session, |records| {
            let mut visibility = records.profile.section_visibility;
            set_if_some(&mut visibility.spotlight, spotlight);
            set_if_some(&mut visibility.media, media);
            set_if_some(&mut visibility.shop, shop);
            set_if_some(&mut visibility.sticker, sticker);
            Ok(Update::SectionVisibility(visibility))
        })?,
        Commands::Sticker { visible, image } => mutate(&mut session, |records| {
            let mut sticker = records.sticker.clone();
            set_if_some(&mut sticker.visible, visible);
            set_if_some(&mut sticker.image_ref, image);
            Ok(Update::Sticker(sticker))
        })?,
        Commands::Spotlight { action } => mutate(&mut session, |records| {
            let mut items = records.spotlight.clone();
            match action {
                SpotlightCommands::Add {
                    title,
                    link,
                    description,
                    image,
                } => {
                    let mut item = SpotlightItem::new(title, link);
                    set_if_some(&mut item.description, description);
                    set_if_some(&mut item.image, image);
                    items.push(item);
                }
                SpotlightCommands::Remove { id } => remove_by_id(&mut items, &id, |i| i.id)?,
            }
            Ok(Update::SpotlightItems(items))
        })?,
        Commands::Media { action } => mutate(&mut session, |records| {
            let mut items: Vec<MediaItem> = records
                .media
                .iter()
                .filter(|i| !i.is_blank())
                .cloned()
                .collect();
            match action {
                MediaCommands::Add {
                    title,
                    url,
                    description,
                } => {
                    let mut item = MediaItem::new(title, url);
                    set_if_some(&mut item.description, description);
                    items.push(item);
                }
                MediaCommands::Remove { id } => remove_by_id(&mut items, &id, |i| i.id)?,
            }
            Ok(Update::MediaItems(items))
        })?,
        Commands::Shop { action } => mutate(&mut session, |records| {
            let mut items = records.shop.clone();
            match action {
                ShopCommands::Add {
                    title,
                    link,
                    price,
                    description,
                    image,
                } => {
                    let mut item = ShopItem::new(title, link);
                    set_if_some(&mut item.price, price);
                    set_if_some(&mut item.description, description);
                    set_if_some(&mut item.image, image);
                    items.push(item);
                }
                ShopCommands::Remove { id } => remove_by_id(&mut items, &id, |i| i.id)?,
            }
            Ok(Update::ShopItems(items))
        })?,
        Commands::Identities | Commands::Reset { .. } => Vec::new(),
    };

    Ok(page_json(&session, &issues))
}

/// Enters edit mode, applies the update built from the current records,
/// and saves. Building errors cancel the edit.
fn mutate<S: KeyValueStore>(
    session: &mut ProfileSession<S>,
    build: impl FnOnce(&ProfileRecords) -> CliResult<Update>,
) -> CliResult<Vec<ValidationIssue>> {
    session.enter_edit()?;

    let update = match build(session.records()) {
        Ok(update) => update,
        Err(e) => {
            session.cancel_edit()?;
            return Err(e);
        }
    };

    let issues = session.update(update)?;
    session.request_save()?;
    Ok(issues)
}

/// Lists identities with a stored profile, then every identity the provider
/// knows about, stored ones first.
fn list_identities<S: KeyValueStore>(
    repo: &ProfileRepository<S>,
    provider: &impl IdentityProvider,
) -> CliResult<Value> {
    let stored = repo.stored_identities()?;

    let mut known = stored.clone();
    for identity in provider.known_identities() {
        if !known.contains(&identity) {
            known.push(identity);
        }
    }

    let names = |identities: &[Identity]| -> Vec<String> {
        identities.iter().map(Identity::to_string).collect()
    };

    Ok(json!({
        "active": provider.active_identity().unwrap_or_default().to_string(),
        "stored": names(&stored),
        "known": names(&known),
    }))
}

fn reset<S: KeyValueStore>(
    mut repo: ProfileRepository<S>,
    identity: Option<Identity>,
    all: bool,
) -> CliResult<Value> {
    if all {
        let removed = repo.reset_all()?;
        info!("Removed {removed} stored keys");
        return Ok(json!({ "removed": removed }));
    }

    let identity = identity.unwrap_or_default();
    repo.reset_identity(&bio_core::resolve(&identity))?;
    Ok(json!({ "reset": identity.to_string() }))
}

fn page_json<S: KeyValueStore>(session: &ProfileSession<S>, issues: &[ValidationIssue]) -> Value {
    let records = session.records();
    let issues: Vec<Value> = issues
        .iter()
        .map(|issue| json!({ "itemId": issue.item_id, "message": issue.message }))
        .collect();

    json!({
        "identity": session.identity().to_string(),
        "firstVisit": session.is_first_visit(),
        "mode": session.mode().as_str(),
        "profile": records.profile,
        "spotlight": records.spotlight,
        "media": records.media,
        "shop": records.shop,
        "sticker": records.sticker,
        "issues": issues,
    })
}

fn remove_by_id<T>(items: &mut Vec<T>, id: &str, item_id: impl Fn(&T) -> Uuid) -> CliResult<()> {
    let id = Uuid::parse_str(id).map_err(|e| invalid(format!("Invalid item ID {id}: {e}")))?;
    let before = items.len();
    items.retain(|item| item_id(item) != id);
    if items.len() == before {
        return Err(invalid(format!("No item with ID {id}")));
    }
    Ok(())
}

fn set_if_some<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

fn invalid(message: String) -> CliError {
    CliError::InvalidArgument { message }
}
