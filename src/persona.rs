use crate::models::{Persona, PersonaResult};

/// Fixed partition of the day into persona bands, both bounds inclusive.
/// Boundary ownership matters: hour 5 still counts as night, 6 is
/// EarlyBird, 11 is LunchtimeScroller, 15 is EveningBinger.
const PERSONA_BANDS: [(u8, u8, Persona); 4] = [
    (0, 5, Persona::NightOwl),
    (6, 10, Persona::EarlyBird),
    (11, 14, Persona::LunchtimeScroller),
    (15, 23, Persona::EveningBinger),
];

/// (persona, normal title, normal description, guilt title, guilt description)
const PERSONA_TEXTS: [(&str, &str, &str, &str); 4] = [
    (
        "🦉 The Night Owl",
        "You spend your night hours trapped in the scroll loop.",
        "🧟 Sleep Deprived Zombie",
        "You're sacrificing your health for late-night scrolling. Your future self will thank you for stopping.",
    ),
    (
        "☀️ The Early Bird",
        "You spend your morning hours trapped in the scroll loop.",
        "☕ Caffeine-Dependent Scroller",
        "Starting your day with TikTok instead of purpose. What a way to set the tone.",
    ),
    (
        "☕ The Lunchtime Scroller",
        "You spend your afternoon hours trapped in the scroll loop.",
        "😴 Productivity Killer",
        "The middle of the day, prime time for getting things done. But here you are, scrolling.",
    ),
    (
        "🌇 The Evening Binger",
        "You spend your evening hours trapped in the scroll loop.",
        "🌙 Mindless Binger",
        "Winding down? More like winding up your dopamine receptors. Sleep quality? What's that?",
    ),
];

fn band_for(peak_hour: u8) -> Persona {
    PERSONA_BANDS
        .iter()
        .find(|(start, end, _)| (*start..=*end).contains(&peak_hour))
        .map(|(_, _, persona)| *persona)
        // hours only run 0-23; the bands cover that range completely
        .unwrap_or(Persona::EveningBinger)
}

fn text_index(persona: Persona) -> usize {
    match persona {
        Persona::NightOwl => 0,
        Persona::EarlyBird => 1,
        Persona::LunchtimeScroller => 2,
        Persona::EveningBinger => 3,
    }
}

/// Maps the peak scrolling hour to a persona. Pure lookup over the fixed
/// tables above; the guilt-trip flag only changes which text variant is
/// returned.
pub fn classify(peak_hour: u8, guilt_trip: bool) -> PersonaResult {
    let label = band_for(peak_hour);
    let (title, description, guilt_title, guilt_description) = PERSONA_TEXTS[text_index(label)];
    if guilt_trip {
        PersonaResult {
            label,
            title: guilt_title,
            description: guilt_description,
        }
    } else {
        PersonaResult {
            label,
            title,
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_partition_the_day() {
        let mut owners = [0usize; 24];
        for hour in 0..24u8 {
            for (start, end, _) in PERSONA_BANDS {
                if (start..=end).contains(&hour) {
                    owners[hour as usize] += 1;
                }
            }
        }
        assert_eq!(owners, [1; 24]);
    }

    #[test]
    fn boundary_hours_have_documented_owners() {
        assert_eq!(classify(5, false).label, Persona::NightOwl);
        assert_eq!(classify(6, false).label, Persona::EarlyBird);
        assert_eq!(classify(10, false).label, Persona::EarlyBird);
        assert_eq!(classify(11, false).label, Persona::LunchtimeScroller);
        assert_eq!(classify(14, false).label, Persona::LunchtimeScroller);
        assert_eq!(classify(15, false).label, Persona::EveningBinger);
        assert_eq!(classify(23, false).label, Persona::EveningBinger);
        assert_eq!(classify(0, false).label, Persona::NightOwl);
    }

    #[test]
    fn five_am_scrolling_is_a_night_habit() {
        // 5 AM belongs to the night band, not the morning one
        assert_eq!(classify(5, false).label, Persona::NightOwl);
        assert_eq!(classify(5, true).label, Persona::NightOwl);
    }

    #[test]
    fn guilt_trip_changes_text_not_label() {
        let kind = classify(2, false);
        let harsh = classify(2, true);
        assert_eq!(kind.label, harsh.label);
        assert_ne!(kind.title, harsh.title);
        assert!(kind.title.contains("Night Owl"));
        assert!(harsh.title.contains("Zombie"));
    }

    #[test]
    fn classification_is_deterministic() {
        assert_eq!(classify(14, true), classify(14, true));
    }
}
