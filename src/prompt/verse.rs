// src/prompt/verse.rs
// Feeling-to-verse lookup: single-shot instruction, no conversation context.
// The model's verse and citation are passed through unverified.

use crate::llm::{ModelRole, RoleText, Transcript};

/// Instruction sent as the system instruction of a verse lookup
pub const VERSE_INSTRUCTION: &str = r#"أنت مساعد متخصص في القرآن الكريم. سيكتب لك المستخدم شعوره، ومهمتك أن تختار آية واحدة من القرآن الكريم تصف هذا الشعور أو تواسي صاحبه.

التزم بالتنسيق التالي حرفياً:
﴿نص الآية كاملاً بالتشكيل﴾
**سورة [اسم السورة]، الآية [رقمها]**

ثم اكتب شرحاً مختصراً في سطرين إلى ثلاثة أسطر يبيّن كيف تتعلق الآية بهذا الشعور وكيف يمكن أن تطمئن القلب.

لا تضف مقدمات أو عناوين أخرى، ولا تختلق آيات؛ إذا لم تكن متأكداً من نص آية فاختر آية أخرى تعرفها يقيناً."#;

/// User turn carrying the feeling
pub fn verse_request(feeling: &str) -> String {
    format!("شعوري الآن: {}", feeling.trim())
}

/// Single-turn transcript for a verse lookup
pub fn verse_transcript(feeling: &str) -> Transcript {
    Transcript {
        system_instruction: Some(VERSE_INSTRUCTION.to_string()),
        turns: vec![RoleText::new(ModelRole::User, verse_request(feeling))],
    }
}
