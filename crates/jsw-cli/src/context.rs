//! Shared command context.
//!
//! Groups the state every command works against so handlers take a single
//! `&mut Context`. This is also the environment boundary: the process
//! environment is read once into an [`EnvBlock`], and [`Context::finish`]
//! hands back what changed.

use crate::ui::Output;
use anyhow::{Context as _, Result};
use jsw_core::session::AUTO_SWITCH_VAR;
use jsw_core::{
    DefaultAlias, EnvBlock, EnvChange, Platform, Registry, SessionController, SessionState,
    Settings,
};
use std::fmt;
use std::path::PathBuf;

/// Groups common state used by command handlers.
pub struct Context {
    pub home: PathBuf,
    pub settings: Settings,
    pub registry: Registry,
    pub defaults: DefaultAlias,
    pub env: EnvBlock,
    pub state: SessionState,
    pub output: Output,
}

impl fmt::Debug for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("home", &self.home)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Context {
    /// Resolve the base directory, load settings and read the session from `env`.
    pub fn load(env: EnvBlock, output: Output) -> Result<Self> {
        let home = jsw_core::try_jsw_home(env.var(jsw_core::HOME_ENV).as_deref())
            .context("Could not determine jsw home. Set JSW_HOME to override.")?;
        jsw_core::ensure_home(&home)?;

        let settings = Settings::load(&jsw_core::config_path(&home))?
            .with_auto_switch_flag(env.var(AUTO_SWITCH_VAR).as_deref());
        let state = SessionState::load(&env, &settings.home_var);
        tracing::debug!(home = %home.display(), ?state, "loaded session");

        Ok(Self {
            registry: Registry::new(jsw_core::registry_path(&home)),
            defaults: DefaultAlias::new(jsw_core::default_alias_path(&home)),
            home,
            settings,
            env,
            state,
            output,
        })
    }

    /// The controller plus the state it mutates, borrowed together.
    pub fn session(&mut self) -> (SessionController<'_>, &mut SessionState) {
        let controller =
            SessionController::new(&self.registry, &self.defaults, &self.settings, &self.env);
        (controller, &mut self.state)
    }

    /// Write the session back and return the environment changes to export.
    pub fn finish(mut self) -> Vec<EnvChange> {
        self.state.store(&mut self.env, &self.settings.home_var);
        self.env.changes()
    }
}
