//! Interactive prompts
//!
//! The wizards are plain state machines; `run` drives one on the terminal
//! with dialoguer.

mod wizard;

pub use wizard::{Answer, InitPlan, InitWizard, PostDraft, PostWizard, Wizard};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::io::ErrorKind;
use wizard::Prompt;

use crate::error::Result;

/// Ask a single question on the terminal
fn ask(prompt: Prompt, theme: &ColorfulTheme) -> Result<Answer> {
    let answer = match prompt {
        Prompt::Text { label, default } => {
            let mut input = Input::<String>::with_theme(theme);
            input.with_prompt(label).allow_empty(true);
            if let Some(default) = default {
                input.default(default);
            }
            input.interact_text().map(Answer::Text)
        }
        Prompt::YesNo { label, default } => Confirm::with_theme(theme)
            .with_prompt(label)
            .default(default)
            .interact_opt()
            .map(|answer| answer.map_or(Answer::Cancel, Answer::YesNo)),
    };

    match answer {
        Ok(answer) => Ok(answer),
        Err(e) if e.kind() == ErrorKind::Interrupted => Ok(Answer::Cancel),
        Err(e) => Err(e.into()),
    }
}

/// Run a wizard to completion; `None` means the user cancelled
pub fn run<W: Wizard>(mut wizard: W) -> Result<Option<W::Output>> {
    let theme = ColorfulTheme::default();

    while let Some(prompt) = wizard.prompt() {
        if let Some(error) = wizard.error() {
            eprintln!("{}", error);
        }
        let answer = ask(prompt, &theme)?;
        wizard = wizard.advance(answer);
    }

    Ok(wizard.finish())
}
