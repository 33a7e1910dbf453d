use crate::cli::parser::{Commands, GeofenceAction};
use crate::config::Config;
use crate::core::geofence;
use crate::core::location::FixedLocation;
use crate::core::ports::{GeofenceDirectory, LocationProvider};
use crate::core::tracker;
use crate::db::log;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{denied, info, success, warning};
use crate::utils::colors::colorize_membership;
use crate::utils::formatting::format_distance;
use crate::utils::geo::{optional_point, parse_coordinates};
use crate::utils::table::Table;
use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Geofence { action } = cmd else {
        return Ok(());
    };

    let store = SqliteStore::open(&cfg.database)?;

    match action {
        GeofenceAction::Add {
            name,
            lat,
            lon,
            radius,
        } => {
            let center = parse_coordinates(*lat, *lon)?;
            let region = store.add_geofence(name.trim(), center, *radius)?;

            log::audit_or_warn(
                store.conn(),
                "geofence_add",
                &region.name,
                &format!("center {} radius {} m", region.center, region.radius_meters),
            );
            success(format!(
                "Geofence #{} '{}' added at {} with radius {}.",
                region.id,
                region.name,
                region.center,
                format_distance(region.radius_meters)
            ));
        }

        GeofenceAction::List => {
            let regions = store.list_all()?;
            if regions.is_empty() {
                info("No geofences configured.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "Latitude", "Longitude", "Radius"]);
            for r in &regions {
                table.add_row(vec![
                    r.id.to_string(),
                    r.name.clone(),
                    format!("{:.6}", r.center.latitude),
                    format!("{:.6}", r.center.longitude),
                    format_distance(r.radius_meters),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        GeofenceAction::Del { id, force } => {
            let regions = store.list_all()?;
            let region = regions
                .iter()
                .find(|r| r.id == *id)
                .ok_or_else(|| AppError::UnknownGeofence(id.to_string()))?;

            if !*force
                && !ask_confirmation(&format!(
                    "Delete geofence #{} '{}'? ONSITE users will no longer be admitted there.",
                    region.id, region.name
                ))
            {
                info("Operation cancelled.");
                return Ok(());
            }

            store.delete_geofence(region.id)?;
            log::audit_or_warn(store.conn(), "geofence_del", &region.name, "deleted");
            success(format!("Geofence #{} '{}' deleted.", region.id, region.name));
        }

        GeofenceAction::Check { location } => {
            let explicit = optional_point(location.lat, location.lon)?;
            let reading = FixedLocation::resolve(explicit, cfg.default_location);
            let regions = store.list_all()?;
            let mode = store.work_mode(&cfg.user_id, cfg.default_work_mode)?;

            let Some(point) = reading.current_location() else {
                let decision = tracker::evaluate_admission(mode, None, &regions);
                match decision.reason {
                    Some(r) => denied(&r),
                    None => info(format!("No location given; {} users are always admitted.", mode)),
                }
                return Ok(());
            };

            info(format!("Location {}", point));

            if regions.is_empty() {
                warning("No geofences configured.");
            } else {
                let mut table = Table::new(&["ID", "Name", "Distance", "Radius", "Status"]);
                for (r, d, inside) in geofence::survey(&point, &regions) {
                    table.add_row(vec![
                        r.id.to_string(),
                        r.name.clone(),
                        format_distance(d),
                        format_distance(r.radius_meters),
                        colorize_membership(inside),
                    ]);
                }
                print!("{}", table.render(&cfg.separator_char));

                if let Some((nearest, d)) = geofence::nearest_region(&point, &regions) {
                    info(format!("Nearest: '{}' at {}", nearest.name, format_distance(d)));
                }
            }

            let decision = tracker::evaluate_admission(mode, Some(&point), &regions);
            match decision.reason {
                Some(r) => denied(&r),
                None => success(format!("Punch-in admitted ({}).", mode)),
            }
        }
    }

    Ok(())
}
