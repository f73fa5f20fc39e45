use rand::seq::SliceRandom;

use habitual_domain::icon::{IconDescriptor, IconRegistry};

const BUILTIN_ICONS: [(&str, &str, &str); 32] = [
    ("exercise", "💪", "Exercise"),
    ("reading", "📚", "Reading"),
    ("meditation", "🧘", "Meditation"),
    ("water", "💧", "Drink Water"),
    ("sleep", "😴", "Sleep"),
    ("writing", "✍️", "Writing"),
    ("cooking", "🍳", "Cooking"),
    ("walking", "🚶", "Walking"),
    ("music", "🎵", "Music"),
    ("cleaning", "🧹", "Cleaning"),
    ("study", "📖", "Study"),
    ("yoga", "🧘‍♀️", "Yoga"),
    ("running", "🏃", "Running"),
    ("vitamins", "💊", "Vitamins"),
    ("journal", "📝", "Journal"),
    ("language", "🗣️", "Language"),
    ("art", "🎨", "Art"),
    ("code", "💻", "Coding"),
    ("garden", "🌱", "Gardening"),
    ("mindfulness", "🌸", "Mindfulness"),
    ("stretch", "🤸", "Stretching"),
    ("photo", "📸", "Photography"),
    ("call", "📞", "Call Family"),
    ("organize", "🗂️", "Organize"),
    ("budget", "💰", "Budget"),
    ("teeth", "🦷", "Brush Teeth"),
    ("skincare", "🧴", "Skincare"),
    ("pray", "🙏", "Prayer"),
    ("dance", "💃", "Dancing"),
    ("bike", "🚴", "Cycling"),
    ("swim", "🏊", "Swimming"),
    ("podcast", "🎧", "Podcast"),
];

fn descriptor((id, emoji, label): (&str, &str, &str)) -> IconDescriptor {
    IconDescriptor::new(id, emoji, label)
}

/// The icon set shipped with the app. Unknown ids resolve to the first entry.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinIconRegistry;

impl IconRegistry for BuiltinIconRegistry {
    fn lookup_by_id(&self, id: &str) -> IconDescriptor {
        let entry = BUILTIN_ICONS
            .iter()
            .find(|(icon_id, _, _)| *icon_id == id)
            .unwrap_or(&BUILTIN_ICONS[0]);
        descriptor(*entry)
    }

    fn random_icon(&self) -> IconDescriptor {
        let entry = BUILTIN_ICONS
            .choose(&mut rand::thread_rng())
            .unwrap_or(&BUILTIN_ICONS[0]);
        descriptor(*entry)
    }

    fn all(&self) -> Vec<IconDescriptor> {
        BUILTIN_ICONS.iter().copied().map(descriptor).collect()
    }
}
