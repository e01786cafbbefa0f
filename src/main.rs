use anyhow::Result;
use tokio::time::{sleep, Duration};

use goalboard::config::Config;
use goalboard::logging::{json_log, log, obj, v_num, v_str, Level};
use goalboard::site;

/// Watch loop: rebuild on a fixed revalidation interval, skipping passes
/// whose input files are unchanged. The first build must succeed; later
/// failures keep the last good output and retry next tick.
#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    json_log(
        "startup",
        obj(&[
            ("out_dir", v_str(&cfg.out_dir)),
            ("revalidate_secs", v_num(cfg.revalidate_secs as f64)),
            (
                "variants",
                v_str(
                    &cfg.variants
                        .iter()
                        .map(|v| v.as_str())
                        .collect::<Vec<_>>()
                        .join(","),
                ),
            ),
        ]),
    );

    let mut last_fingerprint: Option<String> = None;

    loop {
        match site::input_fingerprint(&cfg) {
            Ok(fp) if last_fingerprint.as_deref() == Some(fp.as_str()) => {
                log(
                    Level::Debug,
                    "build",
                    "skip_unchanged",
                    obj(&[("fingerprint", v_str(&fp))]),
                );
            }
            Ok(fp) => match site::build(&cfg) {
                Ok(manifest) => {
                    for page in &manifest.pages {
                        json_log(
                            "build",
                            obj(&[
                                ("variant", v_str(&page.variant)),
                                ("output", v_str(&page.output)),
                                ("bytes", v_num(page.bytes as f64)),
                                ("dates", v_num(page.dates as f64)),
                                ("games", v_num(page.games as f64)),
                            ]),
                        );
                    }
                    last_fingerprint = Some(fp);
                }
                Err(err) if last_fingerprint.is_none() => return Err(err),
                Err(err) => {
                    log(
                        Level::Error,
                        "build",
                        "pass_failed",
                        obj(&[("error", v_str(&format!("{:#}", err)))]),
                    );
                }
            },
            Err(err) if last_fingerprint.is_none() => return Err(err),
            Err(err) => {
                log(
                    Level::Error,
                    "build",
                    "fingerprint_failed",
                    obj(&[("error", v_str(&format!("{:#}", err)))]),
                );
            }
        }

        sleep(Duration::from_secs(cfg.revalidate_secs)).await;
    }
}
