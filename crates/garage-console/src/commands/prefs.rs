use super::print_json;
use anyhow::Result;
use clap::Subcommand;
use garage_application::ConsoleContext;
use garage_core::preferences::ThemeColors;
use serde_json::json;

#[derive(Subcommand)]
pub enum SidebarAction {
    /// Print whether the sidebar is collapsed
    Show,
    /// Flip the collapsed state
    Toggle,
    /// Set the collapsed state
    Set { collapsed: bool },
}

#[derive(Subcommand)]
pub enum ThemeAction {
    /// Print the current theme colors
    Show,
    /// Replace the theme colors
    Set {
        #[arg(long)]
        primary: String,
        #[arg(long)]
        secondary: String,
        #[arg(long)]
        accent: String,
    },
    /// Restore the default colors
    Reset,
}

pub async fn sidebar(ctx: &ConsoleContext, action: SidebarAction) -> Result<()> {
    let preferences = ctx.preferences();
    let collapsed = match action {
        SidebarAction::Show => preferences.is_sidebar_collapsed().await,
        SidebarAction::Toggle => preferences.toggle_sidebar().await?,
        SidebarAction::Set { collapsed } => {
            preferences.set_sidebar_collapsed(collapsed).await?;
            collapsed
        }
    };
    print_json(&json!({ "sidebarCollapsed": collapsed }))
}

pub async fn theme(ctx: &ConsoleContext, action: ThemeAction) -> Result<()> {
    let preferences = ctx.preferences();
    let theme = match action {
        ThemeAction::Show => preferences.get_theme().await,
        ThemeAction::Set {
            primary,
            secondary,
            accent,
        } => {
            let theme = ThemeColors {
                primary,
                secondary,
                accent,
            };
            preferences.set_theme(theme.clone()).await?;
            theme
        }
        ThemeAction::Reset => preferences.reset_theme().await?,
    };
    print_json(&theme)
}
