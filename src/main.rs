//! Headless simulator for the site renderers
//!
//! Drives the particle field, helix and radar scenes at display rate against a
//! counting painter, runs a stat counter and the simulated contact send, and
//! reports throughput through `tracing`.
//!
//! Run with: cargo run --bin site-sim --features cli

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use medvance_site::core::form::FieldKind;
    use medvance_site::core::{
        ContactForm, CounterAnimation, CountingPainter, Helix, ParticleField, Radar, Scene,
        SiteConfig, SubmitOutcome,
    };
    use medvance_site::time::{now_ms, FpsCounter};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::time::Duration;
    use tracing::{info, warn};
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,medvance_site=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let config = match std::env::var("MEDVANCE_CONFIG") {
        Ok(path) => {
            info!(path = %path, "Loading site config");
            SiteConfig::from_json(&std::fs::read_to_string(&path)?)?
        }
        Err(_) => SiteConfig::default(),
    };
    let seconds: u64 = std::env::var("SIM_SECONDS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5);
    let (width, height) = (1280.0, 720.0);

    let mut particles = ParticleField::new(config.particles.clone(), width, height, &mut SmallRng::from_entropy());
    let mut helix = Helix::new(config.helix.clone(), width, height);
    let mut radar = Radar::new(config.radar.clone(), width, height);
    let mut painters = [CountingPainter::default(), CountingPainter::default(), CountingPainter::default()];

    let mut counter = CounterAnimation::new(1500, config.counter.duration_ms, "+");
    let mut counter_done = false;
    let mut fps = FpsCounter::new();

    info!(width, height, seconds, "Simulating renderers");

    let deadline = tokio::time::sleep(Duration::from_secs(seconds));
    tokio::pin!(deadline);
    let mut frame_interval = tokio::time::interval(Duration::from_micros(16_667));
    let mut stats_interval = tokio::time::interval(Duration::from_secs(1));
    let mut frames = 0u64;

    loop {
        tokio::select! {
            _ = &mut deadline => break,
            _ = tokio::signal::ctrl_c() => {
                warn!("Interrupted");
                break;
            }
            _ = frame_interval.tick() => {
                let now = now_ms();
                fps.tick(now);
                frames += 1;

                // Sweep the pointer across the field so repulsion is exercised
                let sweep = (frames % 600) as f64 / 600.0;
                particles.set_pointer(sweep * width, height / 2.0);

                particles.frame(&mut painters[0]);
                helix.frame(&mut painters[1]);
                radar.frame(&mut painters[2]);

                if !counter_done {
                    let frame = counter.sample(now);
                    if frame.done {
                        info!(text = %frame.text, "Counter finished");
                        counter_done = true;
                    }
                }
            }
            _ = stats_interval.tick() => {
                info!(
                    frames,
                    fps = %format!("{:.1}", fps.fps()),
                    links = particles.links().len(),
                    helix_clock = helix.clock(),
                    radar_clock = radar.clock(),
                    "stats"
                );
            }
        }
    }

    for (scene, painter) in [particles.name(), helix.name(), radar.name()].into_iter().zip(&painters) {
        info!(
            scene,
            frames = painter.clears,
            circles = painter.filled + painter.stroked,
            lines = painter.lines,
            "Draw totals"
        );
    }

    // The contact form has no backend; this only replays the simulated send.
    let mut form = ContactForm::default();
    let outcome = form.submit([(FieldKind::Text, "Sim"), (FieldKind::Email, "sim@example.com")]);
    if matches!(outcome, SubmitOutcome::Sending(_)) {
        tokio::time::sleep(Duration::from_millis(config.form.send_delay_ms as u64)).await;
        form.complete_send();
        info!(phase = ?form.phase(), "Contact send simulated");
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {}
