//! Command handlers - the caller side of the API clients.

use std::io::Write;

use anyhow::{Context, bail};
use uuid::Uuid;

use vitesse_core::DomainError;
use vitesse_core::domain::validation::{RegistrationForm, is_valid_email};
use vitesse_core::domain::{Authenticated, Candidate, CandidateFilter, NewCandidate};

use crate::cli::{AddArgs, Command, EditArgs, ListArgs, RegisterArgs};
use crate::config::Credentials;
use crate::state::AppState;

/// Run one command, writing user-facing output to `out`.
pub async fn execute<W: Write>(
    command: Command,
    state: &AppState,
    credentials: &Credentials,
    out: &mut W,
) -> anyhow::Result<()> {
    match command {
        Command::Register(args) => register(state, args, out).await,
        Command::Login => {
            let access = login(state, credentials).await?;
            let role = if access.is_admin { "admin" } else { "user" };
            writeln!(out, "Logged in as {role}")?;
            Ok(())
        }
        Command::List(args) => {
            login(state, credentials).await?;
            list(state, args, out).await
        }
        Command::Show { id } => {
            login(state, credentials).await?;
            let candidate = find(state, id).await?;
            write_detail(out, &candidate)?;
            Ok(())
        }
        Command::Add(args) => {
            login(state, credentials).await?;
            add(state, args, out).await
        }
        Command::Edit(args) => {
            let access = login(state, credentials).await?;
            require_admin(access, "edit candidates")?;
            edit(state, args, out).await
        }
        Command::Favorite { id } => {
            let access = login(state, credentials).await?;
            require_admin(access, "change favorites")?;
            toggle_favorite(state, id, out).await
        }
        Command::Delete { id } => {
            login(state, credentials).await?;
            let candidate = find(state, id).await?;
            state.candidates.delete(&candidate).await?;
            writeln!(out, "Deleted {}", candidate.full_name())?;
            Ok(())
        }
    }
}

async fn login(state: &AppState, credentials: &Credentials) -> anyhow::Result<Authenticated> {
    let email = credentials
        .email
        .as_deref()
        .context("no login email; pass --email or set VITESSE_EMAIL")?;
    let password = credentials
        .password
        .as_deref()
        .context("no login password; pass --password or set VITESSE_PASSWORD")?;

    if !is_valid_email(email) {
        return Err(DomainError::Validation(format!("'{email}' is not a valid email address")).into());
    }

    let access = state
        .auth
        .authenticate(email, password)
        .await
        .context("login failed")?;
    Ok(access)
}

fn require_admin(access: Authenticated, action: &str) -> Result<(), DomainError> {
    if access.is_admin {
        Ok(())
    } else {
        Err(DomainError::Unauthorized(format!("only admins can {action}")))
    }
}

async fn register<W: Write>(state: &AppState, args: RegisterArgs, out: &mut W) -> anyhow::Result<()> {
    let form = RegistrationForm {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.account_email,
        password: args.account_password,
        confirm_password: args.confirm_password,
    };
    form.validate()?;

    state
        .register
        .create_account(&form.email, &form.password, &form.first_name, &form.last_name)
        .await
        .context("registration failed")?;

    writeln!(out, "Account created for {}", form.email)?;
    Ok(())
}

async fn list<W: Write>(state: &AppState, args: ListArgs, out: &mut W) -> anyhow::Result<()> {
    let candidates = state.candidates.list().await?;
    let filter = CandidateFilter::new(args.search, args.favorites);
    let visible = filter.apply(&candidates);

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(&visible)?)?;
        return Ok(());
    }

    if visible.is_empty() {
        writeln!(out, "No candidates")?;
        return Ok(());
    }
    for candidate in visible {
        write_row(out, candidate)?;
    }
    Ok(())
}

async fn add<W: Write>(state: &AppState, args: AddArgs, out: &mut W) -> anyhow::Result<()> {
    if !is_valid_email(&args.candidate_email) {
        bail!(DomainError::Validation(format!(
            "'{}' is not a valid email address",
            args.candidate_email
        )));
    }

    let draft = NewCandidate {
        first_name: args.first_name,
        last_name: args.last_name,
        email: args.candidate_email,
        phone: args.phone,
        linkedin_web_address: args.linkedin.filter(|s| !s.is_empty()),
        note: args.note.filter(|s| !s.is_empty()),
    };
    let name = format!("{} {}", draft.first_name, draft.last_name);

    let candidates = state.candidates.create(draft).await?;
    writeln!(out, "Created {name} ({} candidates)", candidates.len())?;
    Ok(())
}

async fn edit<W: Write>(state: &AppState, args: EditArgs, out: &mut W) -> anyhow::Result<()> {
    let mut candidate = find(state, args.id).await?;
    apply_edits(&mut candidate, args);

    if !is_valid_email(&candidate.email) {
        bail!(DomainError::Validation(format!(
            "'{}' is not a valid email address",
            candidate.email
        )));
    }

    state.candidates.update(&candidate).await?;
    writeln!(out, "Updated {}", candidate.full_name())?;
    Ok(())
}

fn apply_edits(candidate: &mut Candidate, args: EditArgs) {
    if let Some(first_name) = args.first_name {
        candidate.first_name = first_name;
    }
    if let Some(last_name) = args.last_name {
        candidate.last_name = last_name;
    }
    if let Some(email) = args.candidate_email {
        candidate.email = email;
    }
    if let Some(phone) = args.phone {
        candidate.phone = Some(phone).filter(|s| !s.is_empty());
    }
    if let Some(linkedin) = args.linkedin {
        candidate.linkedin_web_address = Some(linkedin).filter(|s| !s.is_empty());
    }
    if let Some(note) = args.note {
        candidate.note = Some(note).filter(|s| !s.is_empty());
    }
}

async fn toggle_favorite<W: Write>(state: &AppState, id: Uuid, out: &mut W) -> anyhow::Result<()> {
    let mut candidate = find(state, id).await?;
    state.candidates.toggle_favorite(&candidate).await?;
    candidate.toggle_favorite();

    let status = if candidate.is_favorite {
        "is now a favorite"
    } else {
        "is no longer a favorite"
    };
    writeln!(out, "{} {status}", candidate.full_name())?;
    Ok(())
}

/// The API has no single-candidate endpoint, so look it up in the list.
async fn find(state: &AppState, id: Uuid) -> anyhow::Result<Candidate> {
    state
        .candidates
        .list()
        .await?
        .into_iter()
        .find(|c| c.id == id)
        .with_context(|| format!("no candidate with id {id}"))
}

fn write_row<W: Write>(out: &mut W, candidate: &Candidate) -> std::io::Result<()> {
    let star = if candidate.is_favorite { '*' } else { ' ' };
    writeln!(
        out,
        "{star} {:<28} {:<32} {}",
        candidate.full_name(),
        candidate.email,
        candidate.id
    )
}

fn write_detail<W: Write>(out: &mut W, candidate: &Candidate) -> std::io::Result<()> {
    let or_dash = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".to_string());

    writeln!(out, "{}", candidate.full_name())?;
    writeln!(out, "  id:       {}", candidate.id)?;
    writeln!(out, "  email:    {}", candidate.email)?;
    writeln!(out, "  phone:    {}", or_dash(&candidate.phone))?;
    writeln!(out, "  linkedin: {}", or_dash(&candidate.linkedin_web_address))?;
    writeln!(out, "  note:     {}", or_dash(&candidate.note))?;
    writeln!(out, "  favorite: {}", if candidate.is_favorite { "yes" } else { "no" })
}
