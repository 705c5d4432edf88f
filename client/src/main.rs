//! # Finance Client
//!
//! Headless entry point: restore the saved session and run one command.
//!
//! ```text
//! finance-client [status | login <email> <password> | register <email> <password> <name>
//!                 | logout | dashboard | budgets | goals | transactions
//!                 | add <income|expense> <amount> <category> [description]]
//! ```

use anyhow::{bail, Context};
use finance_client::app::App;
use finance_client::config::ClientConfig;
use finance_client::debug::logger;
use finance_client::session::AuthStatus;
use finance_client::core::service::FinanceApi;
use finance_client::services::api::{budgets, goals, stats, transactions};
use shared::{format_currency, format_percent, now_rfc3339, NewTransaction, TransactionKind};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ClientConfig::from_env().context("invalid configuration")?;
    let _log_guard = logger::init(&config.log).context("failed to initialize logging")?;

    let app = App::new(config)?;
    let status = app.restore().await;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str).unwrap_or("status");
    let rest = args.get(1..).unwrap_or_default();

    match (command, rest) {
        ("status", _) => match app.session().current_user() {
            Some(user) => println!("Signed in as {} <{}>", user.name, user.email),
            None => println!("Not signed in"),
        },
        ("login", [email, password]) => {
            let user = app.login(email, password).await.map_err(|e| anyhow::anyhow!(e.user_message()))?;
            println!("Welcome back, {}", user.name);
        }
        ("register", [email, password, name]) => {
            let user = app
                .register(email, password, name)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            println!("Account created for {}", user.email);
        }
        ("logout", _) => {
            app.logout().await;
            println!("Signed out");
        }
        ("dashboard" | "budgets" | "goals" | "transactions" | "add", _) if status != AuthStatus::Authenticated => {
            tracing::info!(command, "Login required");
            println!("Please log in first: finance-client login <email> <password>");
        }
        ("dashboard", _) => print_dashboard(&app).await?,
        ("budgets", _) => print_budgets(&app).await?,
        ("goals", _) => print_goals(&app).await?,
        ("transactions", _) => print_transactions(&app).await?,
        ("add", [kind, amount, category, description @ ..]) => {
            let kind = match kind.as_str() {
                "income" => TransactionKind::Income,
                "expense" => TransactionKind::Expense,
                other => bail!("transaction type must be income or expense, got {}", other),
            };
            let amount: f64 = amount.parse().with_context(|| format!("invalid amount {:?}", amount))?;
            let transaction = NewTransaction {
                kind,
                amount,
                category: category.clone(),
                description: (!description.is_empty()).then(|| description.join(" ")),
                date: now_rfc3339(),
            };
            let created = app
                .api()
                .create_transaction(&transaction)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message_or(transactions::FAILURE_MESSAGE)))?;
            println!("Added {} {} ({})", created.category, format_currency(created.amount), created.id);
        }
        (other, _) => bail!("unknown command or wrong arguments: {}", other),
    }

    Ok(())
}

async fn print_dashboard(app: &App) -> anyhow::Result<()> {
    let dashboard = app
        .dashboard()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message_or(stats::FAILURE_MESSAGE)))?;
    let stats = &dashboard.stats;

    println!("Balance         {}", format_currency(stats.balance));
    println!("Total income    {}", format_currency(stats.total_income));
    println!("Total expenses  {}", format_currency(stats.total_expenses));
    println!("Transactions    {}", stats.transaction_count);
    for bar in &dashboard.bars {
        println!("  recent {:<9} {}", bar.label, format_currency(bar.amount));
    }
    if !dashboard.slices.is_empty() {
        println!("Expenses by category");
        for slice in &dashboard.slices {
            println!("  {} {:<16} {}", slice.color(), slice.category, format_currency(slice.amount));
        }
    }
    Ok(())
}

async fn print_budgets(app: &App) -> anyhow::Result<()> {
    let budgets = app
        .budget_overview()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message_or(budgets::FAILURE_MESSAGE)))?;

    if budgets.is_empty() {
        println!("No budgets yet");
    }
    for view in budgets {
        let b = &view.budget;
        println!(
            "{:<16} {} / {} ({}) {:>5}{}",
            b.category,
            format_currency(b.spent_amount),
            format_currency(b.limit_amount),
            b.period.label(),
            format_percent(view.utilization.ratio),
            if view.utilization.shows_warning() { "  approaching limit" } else { "" }
        );
    }
    Ok(())
}

async fn print_goals(app: &App) -> anyhow::Result<()> {
    let goals = app
        .goal_overview()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message_or(goals::FAILURE_MESSAGE)))?;

    if goals.is_empty() {
        println!("No savings goals yet");
    }
    for view in goals {
        let g = &view.goal;
        let state = if view.progress.is_complete {
            "reached".to_string()
        } else {
            format!("{} to go", format_currency(view.progress.remaining()))
        };
        println!(
            "{:<16} {} / {} {:>5} by {} ({})",
            g.name,
            format_currency(g.current_amount),
            format_currency(g.target_amount),
            format_percent(view.progress.ratio),
            g.deadline,
            state
        );
    }
    Ok(())
}

async fn print_transactions(app: &App) -> anyhow::Result<()> {
    let list = app
        .api()
        .list_transactions()
        .await
        .map_err(|e| anyhow::anyhow!(e.user_message_or(transactions::FAILURE_MESSAGE)))?;

    if list.is_empty() {
        println!("No transactions yet");
    }
    for t in list {
        let signed = match t.kind {
            TransactionKind::Income => t.amount,
            TransactionKind::Expense => -t.amount,
        };
        println!(
            "{:<26} {:<16} {:>12}  {}",
            t.date,
            t.category,
            format_currency(signed),
            t.description.as_deref().unwrap_or("")
        );
    }
    Ok(())
}
