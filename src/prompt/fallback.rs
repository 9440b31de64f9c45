// src/prompt/fallback.rs
// Canned replies for fallback mode (LOCAL_FALLBACK=true without a credential)

/// Used when the transcript holds no user text to echo
const DEFAULT_ECHO: &str = "مرحباً";

/// Verse returned by the verse lookup in fallback mode
pub const FALLBACK_VERSE: &str = "﴿الَّذِينَ آمَنُوا وَتَطْمَئِنُّ قُلُوبُهُم بِذِكْرِ اللَّهِ ۗ أَلَا بِذِكْرِ اللَّهِ تَطْمَئِنُّ الْقُلُوبُ﴾\n**سورة الرعد، الآية 28**\n\n(وضع تجريبي) ذكر الله يسكّن القلب مهما اشتدّ ما تشعر به؛ خذ دقيقة الآن لتردد الذكر بهدوء.";

/// Echo the user's last message inside a short supportive wrapper
pub fn fallback_reply(last_user_text: &str) -> String {
    let text = match last_user_text.trim() {
        "" => DEFAULT_ECHO,
        t => t,
    };
    format!(
        "(وضع تجريبي) شكرًا لمشاركتك: \"{text}\". أستطيع مساعدتك بذكر خطوات بسيطة: تنفس بعمق، حاول كتابة ما تشعر به، وفكر في خطوة صغيرة يمكن تنفيذها اليوم."
    )
}
