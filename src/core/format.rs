/// Human readable cooking time, e.g. `1 hr 15 min`
pub fn format_time(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }

    let hours = minutes / 60;
    let remaining = minutes % 60;

    if remaining == 0 {
        format!("{} hr", hours)
    } else {
        format!("{} hr {} min", hours, remaining)
    }
}
