//! Interactive menu shown when `soulscript` runs in a terminal without a
//! subcommand.

use std::io;

use anyhow::{Context, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Editor, Select};
use soul_core::prompt::{WritingMode, PROMPTS};
use soul_core::SoulError;
use soul_report::weekly::weekly_view;
use soul_report::OutputFormat;

use crate::screens::{self, Session, APP_TITLE, WELCOME};

const MENU: [&str; 3] = ["Journal Entry", "Mood Report", "Quit"];

/// Run the menu loop until the user quits or presses Esc.
pub fn run(session: &Session) -> Result<()> {
    let theme = ColorfulTheme::default();
    println!("{APP_TITLE}");
    println!("{WELCOME}");
    println!();

    loop {
        let choice = Select::with_theme(&theme)
            .with_prompt("Navigation")
            .items(&MENU)
            .default(0)
            .interact_opt()
            .context("menu selection failed")?;

        match choice {
            Some(0) => journal_entry(&theme, session)?,
            Some(1) => mood_report(&theme, session)?,
            _ => return Ok(()),
        }
        println!();
    }
}

fn journal_entry(theme: &ColorfulTheme, session: &Session) -> Result<()> {
    let Some(mode) = choose_mode(theme)? else {
        return Ok(());
    };

    let mut stdout = io::stdout().lock();
    screens::journal_heading(&mut stdout, mode)?;
    drop(stdout);

    let text = Editor::new()
        .edit("")
        .context("failed to open editor")?
        .unwrap_or_default();

    let mut stdout = io::stdout().lock();
    match screens::submit_entry(&mut stdout, session, &text) {
        Ok(_) => Ok(()),
        Err(err) => match err.downcast_ref::<SoulError>() {
            Some(SoulError::EmptyEntry) => {
                eprintln!("{}", SoulError::EmptyEntry);
                Ok(())
            }
            _ => Err(err),
        },
    }
}

fn choose_mode(theme: &ColorfulTheme) -> Result<Option<WritingMode>> {
    let mode = Select::with_theme(theme)
        .with_prompt("Choose your writing mode")
        .items(&WritingMode::LABELS)
        .default(0)
        .interact_opt()
        .context("mode selection failed")?;

    match mode {
        Some(0) => Ok(Some(WritingMode::FreeWrite)),
        Some(_) => {
            let prompt = Select::with_theme(theme)
                .with_prompt("Select a prompt")
                .items(&PROMPTS)
                .default(0)
                .interact_opt()
                .context("prompt selection failed")?;
            Ok(prompt.map(WritingMode::Prompted))
        }
        None => Ok(None),
    }
}

fn mood_report(theme: &ColorfulTheme, session: &Session) -> Result<()> {
    let view = weekly_view(&session.store, session.today)?;

    let mut stdout = io::stdout().lock();
    let Some(report) = screens::report_overview(&mut stdout, session, &view, None)? else {
        return Ok(());
    };
    drop(stdout);

    let generate = Confirm::with_theme(theme)
        .with_prompt("Generate Mood Report?")
        .default(true)
        .interact()
        .context("confirmation failed")?;

    if generate {
        let mut stdout = io::stdout().lock();
        screens::report_listing(&mut stdout, report, OutputFormat::Text)?;
    }
    Ok(())
}
