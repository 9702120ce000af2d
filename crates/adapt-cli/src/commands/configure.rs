use anyhow::Result;
use console::style;

use adapt::key_manager::{
    get_api_key_default, save_to_keyring_default, KeyRetrievalStrategy, GEMINI_API_KEY,
};

pub fn handle_configure() -> Result<()> {
    cliclack::intro(style(" configure-adapt ").on_cyan().black())?;

    let key = GEMINI_API_KEY;
    if get_api_key_default(key, KeyRetrievalStrategy::KeyringOnly).is_ok() {
        cliclack::log::info(format!("{} is already available in the keyring", key))?;
        if !cliclack::confirm("Would you like to overwrite this value?").interact()? {
            cliclack::outro("Nothing changed")?;
            return Ok(());
        }
    } else if let Ok(value) = get_api_key_default(key, KeyRetrievalStrategy::EnvironmentOnly) {
        cliclack::log::info(format!("Detected {} in env", key))?;
        if cliclack::confirm("Would you like to save it to your keyring?").interact()? {
            save_to_keyring_default(key, &value)?;
            cliclack::outro("Saved")?;
            return Ok(());
        }
    }

    let value: String = cliclack::password(format!("Enter the value for {}", key))
        .mask('▪')
        .interact()?;
    save_to_keyring_default(key, value.trim())?;
    cliclack::outro(format!("{} saved to the keyring", key))?;
    Ok(())
}
