//! Interactive prompts using dialoguer

use anyhow::Result;
use dialoguer::{Confirm, Input};

use crate::wizard::MIN_VISION_CHARS;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Ask for the startup vision on a plain terminal
pub fn prompt_vision() -> Result<String> {
    let vision: String = Input::new()
        .with_prompt(format!(
            "Describe your startup vision (more than {} characters)",
            MIN_VISION_CHARS
        ))
        .validate_with(|input: &String| -> Result<(), String> {
            let len = input.trim().chars().count();
            if len > MIN_VISION_CHARS {
                Ok(())
            } else {
                Err(format!("{} more characters needed", MIN_VISION_CHARS + 1 - len))
            }
        })
        .interact_text()?;
    Ok(vision)
}
