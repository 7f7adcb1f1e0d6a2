//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command.

use comfy_table::{ContentArrangement, Table};
use console::style;

use crate::generator::Strength;
use crate::vault::CredentialRecord;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    println!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a blue info message: "info_sign {msg}"
pub fn info(msg: &str) {
    println!("{} {}", style("\u{2139}").blue().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    println!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// A strength label styled with the meter's colors.
pub fn strength_label(strength: Strength) -> String {
    let label = strength.label();
    match strength {
        Strength::Weak => style(label).red().to_string(),
        Strength::Fair => style(label).yellow().to_string(),
        Strength::Good => style(label).blue().to_string(),
        Strength::Strong => style(label).green().to_string(),
    }
}

/// Print a table of credentials (Id, Title, Account, Secret, Site,
/// Category, Created).  Secrets are masked unless `show_secrets`.
pub fn print_records_table(records: &[&CredentialRecord], show_secrets: bool) {
    if records.is_empty() {
        info("No credentials found.");
        tip("Run `credvault add <TITLE> --account <ACCOUNT>` to store one.");
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Id", "Title", "Account", "Secret", "Site", "Category", "Created",
    ]);

    for r in records {
        let secret = if show_secrets {
            r.secret.clone()
        } else {
            "\u{2022}".repeat(8)
        };
        table.add_row(vec![
            r.id.clone(),
            r.title.clone(),
            r.account.clone(),
            secret,
            r.site.clone(),
            r.category.to_string(),
            r.created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]);
    }

    println!("{table}");
}
