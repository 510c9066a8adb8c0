use talentfit_cli::run;

fn main() {
    if let Err(err) = run() {
        eprintln!("application error: {err}");
        // Rejected quiz answers or transitions exit 2; environment failures exit 1.
        std::process::exit(if err.is_rejected_input() { 2 } else { 1 });
    }
}
