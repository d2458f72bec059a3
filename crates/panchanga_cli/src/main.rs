use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};
use panchanga_base::{
    AyanamsaRegistry, AyanamsaSelector, HorizonSolver, SiderealPair, karana_from_elongation,
    nakshatra_from_longitude, tithi_from_elongation, yoga_from_sum,
};
use panchanga_config::EngineConfig;
use panchanga_core::{AnalyticProvider, GeoLocation};
use panchanga_search::{Anchor, Panchanga, panchanga_for_instant};
use panchanga_time::Instant;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panchanga", about = "Panchanga engine CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum AnchorArg {
    Sunrise,
    Instant,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchanga for an instant and place
    Day {
        /// RFC 3339 timestamp (e.g. 2025-07-20T19:00:00Z)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: Option<f64>,
        /// Longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: Option<f64>,
        /// Altitude above sea level in meters
        #[arg(long, default_value = "0")]
        alt: f64,
        /// Ayanamsa system id or name (default: Lahiri)
        #[arg(long)]
        ayanamsa: Option<String>,
        /// Classify at sunrise (default) or at the given instant
        #[arg(long, value_enum)]
        anchor: Option<AnchorArg>,
        /// TOML configuration file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// List ayanamsa systems sorted by value
    Ayanamsas {
        /// RFC 3339 timestamp (default: now)
        #[arg(long)]
        date: Option<String>,
    },
    /// Classify sidereal Sun and Moon longitudes
    Classify {
        /// Sidereal Sun longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        sun: f64,
        /// Sidereal Moon longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn parse_instant(s: &str) -> Instant {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| Instant::from(dt.with_timezone(&Utc)))
        .unwrap_or_else(|e| fail(format!("invalid RFC 3339 timestamp {s:?}: {e}")))
}

fn load_config(path: Option<&PathBuf>) -> EngineConfig {
    match path {
        Some(p) => panchanga_config::load(p).unwrap_or_else(|e| fail(format!("config: {e}"))),
        None => EngineConfig::default(),
    }
}

fn fmt_opt(t: Option<Instant>) -> String {
    t.map_or_else(|| "-".to_string(), |t| t.to_string())
}

fn print_panchanga(p: &Panchanga) {
    println!("Instant:   {}", p.instant);
    println!(
        "Location:  {:.4}, {:.4} ({} m)",
        p.location.latitude_deg, p.location.longitude_deg, p.location.altitude_m
    );
    println!(
        "Ayanamsa:  {} = {:.6} deg{}",
        p.system,
        p.ayanamsa.degrees(),
        if p.ayanamsa.is_live() { "" } else { " (approx)" }
    );
    println!("Sunrise:   {}", fmt_opt(p.day.sunrise));
    println!("Sunset:    {}", fmt_opt(p.day.sunset));
    println!("Anchor:    {}", p.anchor);
    println!();

    let t = &p.tithi;
    println!(
        "Tithi:     {} {} ({:.1}%)  {} -> {}  next {}",
        t.paksha.name(),
        t.tithi.name(),
        100.0 * t.fraction_complete,
        fmt_opt(t.start),
        fmt_opt(t.end),
        t.next.name()
    );
    println!(
        "Vara:      {} ({})  {} -> {}",
        p.vara.vara.name(),
        p.vara.vara.english_name(),
        fmt_opt(p.vara.start),
        fmt_opt(p.vara.end)
    );
    let n = &p.nakshatra;
    println!(
        "Nakshatra: {} pada {} ({:.1}%)  {} -> {}  next {}",
        n.nakshatra.name(),
        n.pada,
        100.0 * n.fraction_complete,
        fmt_opt(n.start),
        fmt_opt(n.end),
        n.next.name()
    );
    let y = &p.yoga;
    println!(
        "Yoga:      {} ({:.1}%)  {} -> {}  next {}",
        y.yoga.name(),
        100.0 * y.fraction_complete,
        fmt_opt(y.start),
        fmt_opt(y.end),
        y.next.name()
    );
    let k = &p.karana;
    println!(
        "Karana:    {} #{} ({:.1}%)  {} -> {}  next {}",
        k.karana.name(),
        k.raw_index,
        100.0 * k.fraction_complete,
        fmt_opt(k.start),
        fmt_opt(k.end),
        k.next.name()
    );

    if p.kalam.is_empty() && p.muhurtas.is_empty() {
        println!();
        println!("No sunrise or sunset: kalam and muhurta windows unavailable");
        return;
    }
    println!();
    for w in &p.kalam {
        println!(
            "{:<10} {:<5} {} -> {}",
            w.name(),
            w.part.name(),
            w.span.start,
            w.span.end
        );
    }
    println!();
    for w in &p.muhurtas {
        println!("{:<10} {} -> {}", w.name(), w.span.start, w.span.end);
    }
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Day {
            date,
            lat,
            lon,
            alt,
            ayanamsa,
            anchor,
            config,
        } => {
            let instant = parse_instant(&date);
            let mut cfg = load_config(config.as_ref());
            if let Some(a) = ayanamsa {
                cfg.ayanamsa = a.parse::<AyanamsaSelector>().unwrap_or_else(|e| match e {});
            }
            if let Some(a) = anchor {
                cfg.panchanga.anchor = match a {
                    AnchorArg::Sunrise => Anchor::Sunrise,
                    AnchorArg::Instant => Anchor::Instant,
                };
            }
            let location = match (lat, lon) {
                (Some(lat), Some(lon)) => GeoLocation::new(lat, lon, alt),
                (None, None) => cfg
                    .location
                    .clone()
                    .unwrap_or_else(|| fail("--lat and --lon required (or [location] in config)")),
                _ => fail("--lat and --lon must be given together"),
            };

            let solver = HorizonSolver::with_config(AnalyticProvider, cfg.riseset);
            match panchanga_for_instant(
                &AnalyticProvider,
                &solver,
                instant,
                &location,
                &cfg.ayanamsa,
                &cfg.panchanga,
            ) {
                Ok(p) => print_panchanga(&p),
                Err(panchanga_search::SearchError::UnknownAyanamsa { selector }) => {
                    eprintln!("Unknown ayanamsa: {selector}");
                    eprintln!("Run `panchanga ayanamsas` for the available systems");
                    std::process::exit(1);
                }
                Err(e) => fail(format!("Error: {e}")),
            }
        }

        Commands::Ayanamsas { date } => {
            let instant = match date {
                Some(d) => parse_instant(&d),
                None => Instant::from(Utc::now()),
            };
            println!("Ayanamsa values at {instant}");
            for r in AyanamsaRegistry::list_live(&AnalyticProvider, instant) {
                println!(
                    "{:>3}  {:<28} {:>10.6}{}",
                    r.system.id,
                    r.system.name,
                    r.value.degrees(),
                    if r.value.is_live() { "" } else { "  (approx)" }
                );
            }
        }

        Commands::Classify { sun, moon } => {
            if !sun.is_finite() || !moon.is_finite() {
                fail("longitudes must be finite");
            }
            let pair = SiderealPair::new(sun, moon);
            let tithi = tithi_from_elongation(pair.elongation_deg());
            let nak = nakshatra_from_longitude(pair.moon_deg);
            let yoga = yoga_from_sum(pair.sum_deg());
            let karana = karana_from_elongation(pair.elongation_deg());
            println!(
                "Tithi:     {} {} ({:.1}%)",
                tithi.tithi.paksha().name(),
                tithi.tithi.name(),
                100.0 * tithi.fraction_complete
            );
            println!(
                "Nakshatra: {} pada {} ({:.1}%)",
                nak.nakshatra.name(),
                nak.pada,
                100.0 * nak.fraction_complete
            );
            println!(
                "Yoga:      {} ({:.1}%)",
                yoga.yoga.name(),
                100.0 * yoga.fraction_complete
            );
            println!(
                "Karana:    {} #{} ({:.1}%)",
                karana.karana.name(),
                karana.raw_index,
                100.0 * karana.fraction_complete
            );
        }
    }
}
