use anyhow::Result;
use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::Select;

pub const HEADLINE: &str = "Детектування та відстежування електросамокатів";
pub const DESCRIPTION: &str = "Веб-дотаток дозволить збільшити безпеку на дорогах та тротуарах шляхом відстеження водіїв електросамокатів у транспортному потоці міста";
pub const START_LABEL: &str = "Розпочати";
const EXIT_LABEL: &str = "Вийти";

/// Show the landing page. Returns `true` when the user chose to start.
pub fn run() -> Result<bool> {
    let term = Term::stdout();
    term.write_line("")?;
    term.write_line(&style(HEADLINE).bold().cyan().to_string())?;
    term.write_line(DESCRIPTION)?;
    term.write_line("")?;

    let choice = Select::with_theme(&ColorfulTheme::default())
        .items(&[START_LABEL, EXIT_LABEL])
        .default(0)
        .interact_on(&term)?;
    Ok(choice == 0)
}
