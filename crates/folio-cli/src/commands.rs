//! Command implementations.
//!
//! Commands return their output as a string so `main` only has to print it.

use std::sync::Arc;

use folio_acl::{AccessControlList, AclConfig, Entry, EntryBuilder};
use folio_core::{AllPermission, PagePermission, Permission, Principal, Role, WikiPrincipal};

use crate::cli::{Cli, Command};
use crate::config::FolioConfig;
use crate::error::{Error, Result};

/// Action keyword granting [`AllPermission`] on the target's wiki.
pub const ALL_ACTIONS: &str = "all";

/// Run the parsed command line.
pub fn run(cli: &Cli, config: &FolioConfig) -> Result<String> {
    match &cli.command {
        Command::Check {
            grants,
            target,
            actions,
        } => {
            let acl = build_acl(&grants.grants, &config.acl)?;
            cmd_check(&acl, target, actions)
        }
        Command::Show { grants } => {
            let acl = build_acl(&grants.grants, &config.acl)?;
            Ok(cmd_show(&acl))
        }
    }
}

/// List the principals that hold `actions` on `target`, one per line.
pub fn cmd_check(acl: &AccessControlList, target: &str, actions: &str) -> Result<String> {
    let request = PagePermission::new(target, actions)?;
    let principals = acl.find_principals(&request);
    log::info!("{} principal(s) hold {request}", principals.len());

    Ok(principals
        .iter()
        .map(|p| format!("{}\n", p.name()))
        .collect())
}

/// Render the ACL.
pub fn cmd_show(acl: &AccessControlList) -> String {
    acl.to_string()
}

/// Build an ACL from `<principal>=<wiki:page>:<actions>` grants.
///
/// Grants naming the same principal are merged into one entry, in the order
/// the principal first appears.
pub fn build_acl(grants: &[String], config: &AclConfig) -> Result<AccessControlList> {
    let mut builders: Vec<(String, EntryBuilder)> = Vec::new();

    for grant in grants {
        let (name, permission) = parse_grant(grant)?;
        match builders.iter_mut().find(|(n, _)| *n == name) {
            Some((_, builder)) => {
                let merged = std::mem::take(builder).shared_permission(permission);
                *builder = merged;
            }
            None => {
                let builder = Entry::builder()
                    .shared_principal(principal_for(&name))
                    .shared_permission(permission);
                builders.push((name, builder));
            }
        }
    }

    let acl = AccessControlList::with_config(config);
    for (name, builder) in builders {
        let added = acl.add_entry(builder.build()?)?;
        log::debug!("Grant set for '{name}' added: {added}");
    }
    Ok(acl)
}

/// Parse one `<principal>=<wiki:page>:<actions>` grant.
///
/// The actions `all` grant every permission on the target's wiki.
pub fn parse_grant(grant: &str) -> Result<(String, Arc<dyn Permission>)> {
    let (name, rest) = grant
        .split_once('=')
        .ok_or_else(|| Error::invalid_grant(grant))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_grant(grant));
    }
    let (target, actions) = rest
        .rsplit_once(':')
        .ok_or_else(|| Error::invalid_grant(grant))?;

    let permission: Arc<dyn Permission> = if actions.trim().eq_ignore_ascii_case(ALL_ACTIONS) {
        let wiki = target.split_once(':').map_or("*", |(wiki, _)| wiki.trim());
        Arc::new(AllPermission::new(wiki))
    } else {
        Arc::new(PagePermission::new(target, actions)?)
    };
    Ok((name.to_string(), permission))
}

fn principal_for(name: &str) -> Arc<dyn Principal> {
    let role = Role::new(name);
    if role.is_builtin() {
        Arc::new(role)
    } else {
        Arc::new(WikiPrincipal::new(name))
    }
}
