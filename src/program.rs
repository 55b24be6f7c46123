use std::collections::BTreeMap;

use crate::types::{DayDefinition, DayKind, Exercise};

pub const PROGRAM_TITLE: &str = "The liftlog";
pub const PROGRAM_SUBTITLE: &str = "The 30 Simple Workouts Program";
pub const PROGRAM_DAYS: usize = 30;

/// Read-only program: day definitions plus exercise descriptions.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Catalog {
    days: Vec<DayDefinition>,
    descriptions: BTreeMap<String, String>,
}

impl Catalog {
    pub fn new(days: Vec<DayDefinition>, descriptions: BTreeMap<String, String>) -> Self {
        Self { days, descriptions }
    }

    /// The bundled 30-day push/pull/legs program.
    pub fn standard() -> Self {
        let days = (0..PROGRAM_DAYS).map(standard_day).collect();
        let descriptions = DESCRIPTIONS
            .iter()
            .map(|&(name, text)| (name.to_string(), text.to_string()))
            .collect();
        Self { days, descriptions }
    }

    pub fn day(&self, day_index: usize) -> Option<&DayDefinition> {
        self.days.get(day_index)
    }

    pub fn days(&self) -> &[DayDefinition] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn description(&self, exercise: &str) -> Option<&str> {
        self.descriptions.get(exercise).map(String::as_str)
    }
}

// Three 10-day blocks; each block tightens the rep scheme.
fn block_scheme(day_index: usize) -> (u8, &'static str) {
    match day_index / 10 {
        0 => (3, "10"),
        1 => (4, "8"),
        _ => (5, "5"),
    }
}

fn standard_day(day_index: usize) -> DayDefinition {
    let (sets, reps) = block_scheme(day_index);
    let accessory_reps = if day_index < 20 { "12" } else { "10" };

    match DayKind::for_day(day_index) {
        DayKind::Push => DayDefinition {
            warmup: vec![
                Exercise::standard("Arm Circles", 1, "20"),
                Exercise::standard("Push Ups", 2, "10"),
            ],
            workout: vec![
                Exercise::standard("Bench Press", sets, reps),
                Exercise::standard("Shoulder Press", sets, reps),
                Exercise::standard("Incline Dumbbell Press", 3, accessory_reps),
                Exercise::standard("Lateral Raise", 3, "15"),
                Exercise::standard("Tricep Pushdown", 3, accessory_reps),
            ],
        },
        DayKind::Pull => DayDefinition {
            warmup: vec![
                Exercise::standard("Band Pull Aparts", 2, "15"),
                Exercise::standard("Scapular Pull Ups", 1, "10"),
            ],
            workout: vec![
                Exercise::standard("Deadlift", sets, reps),
                Exercise::standard("Barbell Row", sets, reps),
                Exercise::standard("Lat Pulldown", 3, accessory_reps),
                Exercise::standard("Face Pull", 3, "15"),
                Exercise::standard("Hammer Curl", 3, accessory_reps),
            ],
        },
        DayKind::Legs => DayDefinition {
            warmup: vec![
                Exercise::standard("Bodyweight Squat", 2, "15"),
                Exercise::standard("Leg Swings", 1, "10"),
            ],
            workout: vec![
                Exercise::standard("Back Squat", sets, reps),
                Exercise::standard("Romanian Deadlift", sets, reps),
                Exercise::standard("Walking Lunge", 3, accessory_reps),
                Exercise::standard("Leg Curl", 3, accessory_reps),
                Exercise::standard("Standing Calf Raise", 3, "15"),
            ],
        },
    }
}

const DESCRIPTIONS: &[(&str, &str)] = &[
    ("Arm Circles", "Stand tall with arms out to the sides and draw small circles, growing them each rep. Reverse direction halfway."),
    ("Push Ups", "Hands just outside shoulder width, body in a straight line. Lower your chest to the floor and press back up."),
    ("Bench Press", "Lie on the bench with eyes under the bar. Lower the bar to mid-chest under control, then press to lockout."),
    ("Shoulder Press", "Standing with the bar at your collarbone, brace and press overhead until arms lock out, moving your head through."),
    ("Incline Dumbbell Press", "On a bench set to 30-45 degrees, press the dumbbells from upper chest to above your shoulders."),
    ("Lateral Raise", "With a slight bend in the elbows, raise the dumbbells out to the sides to shoulder height. Lower slowly."),
    ("Tricep Pushdown", "At a cable station, keep elbows pinned to your sides and extend the forearms until the arms are straight."),
    ("Band Pull Aparts", "Hold a band at shoulder height with straight arms and pull it apart until it touches your chest."),
    ("Scapular Pull Ups", "Hang from a bar with straight arms and pull your shoulder blades down and back without bending the elbows."),
    ("Deadlift", "Bar over mid-foot, hinge and grip it, brace, then drive through the floor until standing tall. Lower with control."),
    ("Barbell Row", "Hinge to roughly 45 degrees with a flat back and row the bar to your lower ribs."),
    ("Lat Pulldown", "Grip the bar wider than shoulders and pull it to your upper chest, leading with the elbows."),
    ("Face Pull", "With a rope at face height, pull toward your forehead while spreading the rope and rotating the hands back."),
    ("Hammer Curl", "Hold dumbbells with palms facing each other and curl without swinging the torso."),
    ("Bodyweight Squat", "Feet shoulder width, sit down and back to full depth keeping the chest up, then stand."),
    ("Leg Swings", "Holding a support, swing one leg forward and back through a comfortable range, then switch."),
    ("Back Squat", "Bar on the upper back, brace and squat to at least parallel, then drive up keeping the chest proud."),
    ("Romanian Deadlift", "From standing, push the hips back with soft knees and lower the bar along the legs until the hamstrings stretch."),
    ("Walking Lunge", "Step forward and lower the back knee toward the floor, then drive through the front foot into the next step."),
    ("Leg Curl", "On the machine, curl the pad toward your glutes and lower it slowly."),
    ("Standing Calf Raise", "Rise onto the balls of your feet as high as possible, pause, then lower into a full stretch."),
];
