use goalboard::config::Config;
use goalboard::site;

/// One-shot build: render every configured page once and exit.
fn main() {
    let cfg = Config::from_env();
    if cfg.variants.is_empty() {
        eprintln!("no variants configured (set VARIANTS=goals,bets,pool)");
        std::process::exit(1);
    }

    let manifest = match site::build(&cfg) {
        Ok(m) => m,
        Err(err) => {
            eprintln!("build failed: {:#}", err);
            std::process::exit(2);
        }
    };

    for page in &manifest.pages {
        println!(
            "wrote {} ({} bytes, {} dates, {} games)",
            page.output, page.bytes, page.dates, page.games
        );
    }
    println!("wrote {}/manifest.json", manifest.out_dir);
}
