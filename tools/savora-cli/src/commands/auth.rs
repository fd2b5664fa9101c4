//! Sign in and out.

use anyhow::Result;
use dialoguer::{Input, Password};
use savora_backend::{AuthService, Credentials};

use super::LoginArgs;
use crate::context::Context;

/// Run the login command.
pub async fn login(args: LoginArgs, ctx: &mut Context) -> Result<()> {
    if let Some(user) = &ctx.store.state().user {
        ctx.output
            .info(&format!("Already signed in as {}", user.email));
        return Ok(());
    }

    let email = match args.email {
        Some(email) => email,
        None => Input::new().with_prompt("Email").interact_text()?,
    };
    let password = match args.password {
        Some(password) => password,
        None => Password::new().with_prompt("Password").interact()?,
    };

    let credentials = Credentials::new(email, password);
    let spinner = ctx.output.spinner("Signing in...");
    let user = ctx.auth.login(&credentials).await;
    spinner.finish_and_clear();
    let user = user?;

    let name = user.name.clone();
    ctx.store.set_user(Some(user))?;
    ctx.output.success(&format!("Welcome back, {}!", name));
    Ok(())
}

/// Run the logout command. The cart and theme stay as they are.
pub async fn logout(ctx: &mut Context) -> Result<()> {
    if ctx.store.state().user.is_none() {
        ctx.output.info("Not signed in.");
        return Ok(());
    }
    ctx.store.set_user(None)?;
    ctx.output.success("Signed out");
    Ok(())
}
