// SPDX-License-Identifier: MPL-2.0
//! Weather panel rules: condition table and fallbacks for absent readings.

use crate::config::{
    DEFAULT_PRESSURE_HPA, DEFAULT_RAINFALL_MM, DEFAULT_UV_INDEX, DEFAULT_VISIBILITY_KM,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WeatherCondition {
    #[default]
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
    Foggy,
}

impl WeatherCondition {
    pub fn icon(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "sun",
            WeatherCondition::Cloudy | WeatherCondition::Foggy => "cloud",
            WeatherCondition::Rainy => "cloud-rain",
            WeatherCondition::Stormy => "cloud-snow",
        }
    }

    /// Foreground and background tint tokens. Fog shares the cloudy tint.
    pub fn tint(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "text-weather-sunny bg-weather-sunny/10",
            WeatherCondition::Cloudy | WeatherCondition::Foggy => {
                "text-weather-cloudy bg-weather-cloudy/10"
            }
            WeatherCondition::Rainy => "text-weather-rainy bg-weather-rainy/10",
            WeatherCondition::Stormy => "text-weather-stormy bg-weather-stormy/10",
        }
    }

    pub fn i18n_key(self) -> &'static str {
        match self {
            WeatherCondition::Sunny => "weather.condition.sunny",
            WeatherCondition::Cloudy => "weather.condition.cloudy",
            WeatherCondition::Rainy => "weather.condition.rainy",
            WeatherCondition::Stormy => "weather.condition.stormy",
            WeatherCondition::Foggy => "weather.condition.foggy",
        }
    }
}

/// A possibly incomplete observation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WeatherReading {
    /// Celsius.
    pub temperature: f64,
    /// Percent.
    pub humidity: f64,
    /// km/h.
    pub wind_speed: f64,
    pub condition: Option<WeatherCondition>,
    /// mm.
    pub rainfall: Option<f64>,
    /// hPa.
    pub pressure: Option<f64>,
    /// km.
    pub visibility: Option<f64>,
    pub uv_index: Option<f64>,
}

/// A reading with every display field filled in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeatherPanel {
    pub temperature: f64,
    pub humidity: f64,
    pub wind_speed: f64,
    pub condition: WeatherCondition,
    pub rainfall: f64,
    pub pressure: f64,
    pub visibility: f64,
    pub uv_index: f64,
}

impl WeatherReading {
    /// Substitutes defaults for absent measurements only; a recorded zero
    /// is kept.
    pub fn resolve(&self) -> WeatherPanel {
        WeatherPanel {
            temperature: self.temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
            condition: self.condition.unwrap_or_default(),
            rainfall: self.rainfall.unwrap_or(DEFAULT_RAINFALL_MM),
            pressure: self.pressure.unwrap_or(DEFAULT_PRESSURE_HPA),
            visibility: self.visibility.unwrap_or(DEFAULT_VISIBILITY_KM),
            uv_index: self.uv_index.unwrap_or(DEFAULT_UV_INDEX),
        }
    }
}
