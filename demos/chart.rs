use chrono::TimeZone;
use chrono_tz::Europe::Paris;

use natal_chart::chart::chart_at;
use natal_chart::types::GeoLocation;
use natal_chart::zodiac::format_degree_minute;

fn main() {
    let location = GeoLocation {
        latitude: 48.8566,
        longitude: 2.3522,
    };

    let dt = Paris.with_ymd_and_hms(1990, 6, 15, 14, 30, 0).unwrap();

    let chart = chart_at(&dt, &location).unwrap();

    println!("=== Natal Chart Example ===");
    println!(
        "Location: Paris ({:.4}°N, {:.4}°E)",
        location.latitude, location.longitude
    );
    println!("Date/Time: {}", dt);
    println!("Julian Day: {:.5}", chart.jd);
    println!();
    println!("--- Angles ---");
    println!("Sun:       {}", format_degree_minute(chart.sun_longitude));
    println!("Ascendant: {}", format_degree_minute(chart.ascendant));
    println!("Midheaven: {}", format_degree_minute(chart.midheaven));
    println!();
    println!("--- Equal Houses ---");
    for (i, cusp) in chart.houses.iter().enumerate() {
        println!("House {:>2}: {:.2}°", i + 1, cusp);
    }
    println!("Sun is in house {}", chart.sun_house);
}
