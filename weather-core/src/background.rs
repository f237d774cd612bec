//! Background image for the current condition keyword.

pub const DEFAULT_BACKGROUND: &str = "default.jpg";

/// Asset name for an OpenWeather condition keyword (`"Rain"`, `"clear"`, ...).
/// Unknown keywords fall back to [`DEFAULT_BACKGROUND`].
pub fn background_for(condition: &str) -> &'static str {
    match condition.trim().to_lowercase().as_str() {
        "thunderstorm" => "thunderstorm.jpg",
        "drizzle" => "drizzle.jpg",
        "rain" => "rainy.jpg",
        "snow" => "snowy.jpg",
        "mist" | "haze" | "fog" => "foggy.jpg",
        "smoke" | "dust" | "ash" | "sand" => "dusty.jpg",
        "squall" => "windy.jpg",
        "tornado" => "tornado.jpg",
        "clear" => "sunny.jpg",
        "clouds" => "cloudy.jpg",
        _ => DEFAULT_BACKGROUND,
    }
}
