//! Canned response pools, two templates per category.
//!
//! Each template interpolates fields from the current metrics snapshot and
//! renders a short preamble followed by bullet recommendations. The texts
//! are fixed at build time and never mutated at runtime.

use phia_core::MetricsSnapshot;

use crate::Category;

/// Number of templates in every category's pool.
pub const POOL_SIZE: usize = 2;

/// Renders template `index` for `category` against the snapshot.
///
/// `index` must be below [`POOL_SIZE`]; callers clamp before rendering.
pub(crate) fn render(category: Category, index: usize, m: &MetricsSnapshot) -> String {
    match (category, index) {
        (Category::Sleep, 0) => format!(
            "Based on your {sleep} average sleep, here are some tips to improve sleep quality:\n\n\
             • Maintain a consistent bedtime routine - go to bed and wake up at the same time daily\n\
             • Avoid screens 1 hour before bedtime\n\
             • Keep your bedroom cool (65-68°F) and dark\n\
             • Try relaxation techniques like deep breathing or meditation\n\
             • Avoid caffeine after 2 PM\n\n\
             Your current sleep duration is good, but quality matters too!",
            sleep = m.sleep_duration,
        ),
        (Category::Sleep, _) => format!(
            "Sleep optimization tips for you:\n\n\
             • Create a wind-down routine 30 minutes before bed\n\
             • Consider your {active} active minutes - exercise helps sleep, but not too close to bedtime\n\
             • Track your sleep patterns to identify what affects your rest\n\
             • Try magnesium supplements (consult your doctor first)\n\
             • Keep a sleep diary to identify patterns\n\n\
             Consistent sleep timing is key to better rest quality!",
            active = m.active_minutes,
        ),
        (Category::Cardio, 0) => format!(
            "Your current resting heart rate is {hr} bpm, which is in a healthy range! \
             Here's how to improve cardiovascular health:\n\n\
             • Aim for 150 minutes of moderate exercise weekly\n\
             • Include both cardio and strength training\n\
             • Your {steps} steps today is excellent - keep it up!\n\
             • Try interval training to improve heart efficiency\n\
             • Monitor your heart rate during workouts\n\n\
             A lower resting heart rate often indicates better fitness!",
            hr = m.heart_rate_bpm,
            steps = m.steps_today,
        ),
        (Category::Cardio, _) => format!(
            "Cardiovascular health insights:\n\n\
             • Your {hr} bpm resting heart rate shows good fitness\n\
             • With {active} active minutes, you're on track\n\
             • Try activities that elevate your heart rate: brisk walking, cycling, swimming\n\
             • Heart rate variability improves with consistent exercise\n\
             • Stay hydrated and manage stress for optimal heart health\n\n\
             Keep up the great work with your activity levels!",
            hr = m.heart_rate_bpm,
            active = m.active_minutes,
        ),
        (Category::Fitness, 0) => format!(
            "Great question about fitness! With {active} active minutes and {steps} steps today, \
             you're doing well:\n\n\
             • Mix cardio with strength training 2-3x per week\n\
             • Progressive overload - gradually increase intensity\n\
             • Recovery is crucial - allow rest days\n\
             • Stay consistent rather than intense\n\
             • Listen to your body to avoid overtraining\n\n\
             Your current activity level is impressive - maintain this momentum!",
            active = m.active_minutes,
            steps = m.steps_today,
        ),
        (Category::Fitness, _) => format!(
            "Fitness optimization based on your data:\n\n\
             • Your {steps} daily steps exceed recommendations\n\
             • Add variety: try different activities to prevent boredom\n\
             • Focus on functional movements that help daily life\n\
             • Track progress with metrics beyond just steps\n\
             • Consider your {sleep} sleep - recovery is when muscles grow\n\n\
             Balance is key: activity, nutrition, and rest work together!",
            steps = m.steps_today,
            sleep = m.sleep_duration,
        ),
        (Category::Stress, 0) => format!(
            "Stress management is crucial for overall health! Here are evidence-based strategies:\n\n\
             • Regular exercise (you're doing great with {active} active minutes!)\n\
             • Deep breathing: 4-7-8 technique (inhale 4, hold 7, exhale 8)\n\
             • Mindfulness meditation - even 5 minutes daily helps\n\
             • Adequate sleep - your {sleep} is good, maintain it\n\
             • Social connections and hobbies\n\
             • Limit caffeine and alcohol\n\n\
             Physical activity is one of the best stress relievers!",
            active = m.active_minutes,
            sleep = m.sleep_duration,
        ),
        (Category::Stress, _) => format!(
            "Stress reduction techniques that work:\n\n\
             • Your {steps} steps help release endorphins naturally\n\
             • Progressive muscle relaxation before bed\n\
             • Time in nature - even 10 minutes outdoors helps\n\
             • Journaling to process thoughts\n\
             • Limit news and social media consumption\n\
             • Practice gratitude daily\n\n\
             Your active lifestyle already supports stress management!",
            steps = m.steps_today,
        ),
        (Category::Nutrition, 0) => format!(
            "Nutrition and weight management insights:\n\n\
             • Your {steps} steps burn approximately 300-400 calories\n\
             • Focus on whole foods: lean proteins, vegetables, fruits, whole grains\n\
             • Portion control is more important than strict dieting\n\
             • Stay hydrated - often thirst is mistaken for hunger\n\
             • Eat mindfully without distractions\n\
             • Balance calories in vs calories out\n\n\
             Combine your great activity level with consistent nutrition habits!",
            steps = m.steps_today,
        ),
        (Category::Nutrition, _) => format!(
            "Healthy eating strategies:\n\n\
             • Plan meals ahead to avoid impulsive choices\n\
             • Include protein with each meal for satiety\n\
             • Your active lifestyle ({active} minutes) supports metabolism\n\
             • Don't skip meals - it can lead to overeating later\n\
             • Listen to hunger and fullness cues\n\
             • Allow occasional treats in moderation\n\n\
             Consistency beats perfection in nutrition!",
            active = m.active_minutes,
        ),
        (Category::General, 0) => format!(
            "Based on your current health metrics, you're doing well! Here's your snapshot:\n\n\
             • Heart Rate: {hr} bpm (healthy range)\n\
             • Steps: {steps} (exceeds daily recommendations)\n\
             • Sleep: {sleep} (good duration)\n\
             • Active Minutes: {active} (great job!)\n\n\
             Key areas to focus on:\n\
             • Maintain consistency in your routines\n\
             • Balance activity with adequate recovery\n\
             • Stay hydrated and eat nutrient-dense foods\n\
             • Monitor how you feel, not just the numbers\n\n\
             What specific aspect would you like to improve?",
            hr = m.heart_rate_bpm,
            steps = m.steps_today,
            sleep = m.sleep_duration,
            active = m.active_minutes,
        ),
        (Category::General, _) => format!(
            "Your health profile looks strong! Here's what stands out:\n\n\
             • Excellent daily activity with {steps} steps\n\
             • Good sleep duration at {sleep}\n\
             • Solid cardiovascular health with {hr} bpm resting HR\n\
             • {active} active minutes shows commitment\n\n\
             To optimize further:\n\
             • Track trends over time, not just daily numbers\n\
             • Focus on sleep quality, not just quantity\n\
             • Include strength training if not already doing so\n\
             • Consider stress management techniques\n\n\
             You're on the right track - keep it up!",
            steps = m.steps_today,
            sleep = m.sleep_duration,
            hr = m.heart_rate_bpm,
            active = m.active_minutes,
        ),
    }
}
