use crate::model::event::{AttributeKey, Event, get_attribute_value};
use crate::model::track::{ColorGetter, Track};

pub const POINT_COLOR: &str = "rgb(31, 119, 180)";
pub const COLOR_ATTRIBUTE_KEY: &str = "COLOR";

pub fn get_specified_color_if_exists(event: &Event) -> Option<String> {
    let key = AttributeKey::Exact(COLOR_ATTRIBUTE_KEY.to_string());
    get_attribute_value(&key, event).map(str::to_string)
}

pub fn default_color_getter(event: &Event) -> String {
    get_specified_color_if_exists(event).unwrap_or_else(|| POINT_COLOR.to_string())
}

/// The track's own getter wins over the one from its timeline configuration.
pub fn get_track_event_custom_color_getter(track: &Track) -> Option<&ColorGetter> {
    track.event_color_getter.as_ref().or_else(|| {
        track
            .timeline_config
            .as_ref()
            .and_then(|c| c.event_color_getter.as_ref())
    })
}

pub fn color_getter_factory(custom: Option<ColorGetter>) -> impl Fn(&Event) -> String {
    move |event: &Event| match &custom {
        Some(getter) => getter
            .color(event)
            .unwrap_or_else(|| default_color_getter(event)),
        None => default_color_getter(event),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/colors.rs"]
mod tests;
