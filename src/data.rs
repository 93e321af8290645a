use crate::models::{Athkar, ListCategory};

pub const MORNING: &str = "morning";
pub const EVENING: &str = "evening";
pub const AFTER_PRAYER: &str = "after_prayer";
pub const SLEEP: &str = "sleep";

const BISMILLAH_PROTECTION: &str = "بِسْمِ اللَّهِ الَّذِي لَا يَضُرُّ مَعَ اسْمِهِ شَيْءٌ فِي الْأَرْضِ وَلَا فِي السَّمَاءِ وَهُوَ السَّمِيعُ الْعَلِيمُ.";
const AYAT_AL_KURSI: &str = "اللَّهُ لَا إِلَهَ إِلَّا هُوَ الْحَيُّ الْقَيُّومُ، لَا تَأْخُذُهُ سِنَةٌ وَلَا نَوْمٌ، لَهُ مَا فِي السَّمَاوَاتِ وَمَا فِي الْأَرْضِ، مَنْ ذَا الَّذِي يَشْفَعُ عِنْدَهُ إِلَّا بِإِذْنِهِ، يَعْلَمُ مَا بَيْنَ أَيْدِيهِمْ وَمَا خَلْفَهُمْ، وَلَا يُحِيطُونَ بِشَيْءٍ مِنْ عِلْمِهِ إِلَّا بِمَا شَاءَ، وَسِعَ كُرْسِيُّهُ السَّمَاوَاتِ وَالْأَرْضَ، وَلَا يَئُودُهُ حِفْظُهُمَا، وَهُوَ الْعَلِيُّ الْعَظِيمُ.";

fn item(id: &str, category: &str, text: &str, count: u32, reference: Option<&str>) -> Athkar {
    Athkar {
        id: id.to_string(),
        category: category.to_string(),
        text: text.to_string(),
        count,
        reference: reference.map(str::to_string),
    }
}

fn list(key: &str, title: &str, storage_key: &str, items: Vec<Athkar>) -> ListCategory {
    ListCategory {
        key: key.to_string(),
        title: title.to_string(),
        items,
        storage_key: storage_key.to_string(),
    }
}

/// The built-in lists in display order.
pub fn builtin_lists() -> Vec<ListCategory> {
    vec![
        list(
            MORNING,
            "أذكار الصباح",
            "morning_completed_v1",
            vec![
                item(
                    "m1",
                    MORNING,
                    "أَصْبَحْنَا وَأَصْبَحَ الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ، لَا إِلَهَ إِلَّا اللَّهُ وَحْدَهُ لَا شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ.",
                    1,
                    Some("مسلم"),
                ),
                item(
                    "m2",
                    MORNING,
                    "اللَّهُمَّ بِكَ أَصْبَحْنَا، وَبِكَ أَمْسَيْنَا، وَبِكَ نَحْيَا، وَبِكَ نَمُوتُ، وَإِلَيْكَ النُّشُورُ.",
                    1,
                    Some("الترمذي"),
                ),
                item(
                    "m3",
                    MORNING,
                    "سُبْحَانَ اللَّهِ وَبِحَمْدِهِ، عَدَدَ خَلْقِهِ، وَرِضَا نَفْسِهِ، وَزِنَةَ عَرْشِهِ، وَمِدَادَ كَلِمَاتِهِ.",
                    3,
                    Some("مسلم"),
                ),
                item("m4", MORNING, BISMILLAH_PROTECTION, 3, Some("أبو داود والترمذي")),
            ],
        ),
        list(
            EVENING,
            "أذكار المساء",
            "evening_completed_v1",
            vec![
                item(
                    "e1",
                    EVENING,
                    "أَمْسَيْنَا وَأَمْسَى الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ، لَا إِلَهَ إِلَّا اللَّهُ وَحْدَهُ لَا شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ.",
                    1,
                    Some("مسلم"),
                ),
                item(
                    "e2",
                    EVENING,
                    "اللَّهُمَّ بِكَ أَمْسَيْنَا، وَبِكَ أَصْبَحْنَا، وَبِكَ نَحْيَا، وَبِكَ نَمُوتُ، وَإِلَيْكَ الْمَصِيرُ.",
                    1,
                    Some("الترمذي"),
                ),
                item(
                    "e3",
                    EVENING,
                    "أَعُوذُ بِكَلِمَاتِ اللَّهِ التَّامَّاتِ مِنْ شَرِّ مَا خَلَقَ.",
                    3,
                    Some("مسلم"),
                ),
                item("e4", EVENING, BISMILLAH_PROTECTION, 3, Some("أبو داود والترمذي")),
            ],
        ),
        list(
            AFTER_PRAYER,
            "أذكار بعد الصلاة",
            "after_prayer_completed_v1",
            vec![
                item("p1", AFTER_PRAYER, "أَسْتَغْفِرُ اللَّهَ.", 3, Some("مسلم")),
                item(
                    "p2",
                    AFTER_PRAYER,
                    "اللَّهُمَّ أَنْتَ السَّلَامُ وَمِنْكَ السَّلَامُ، تَبَارَكْتَ يَا ذَا الْجَلَالِ وَالْإِكْرَامِ.",
                    1,
                    Some("مسلم"),
                ),
                item("p3", AFTER_PRAYER, "سُبْحَانَ اللَّهِ.", 33, Some("مسلم")),
                item("p4", AFTER_PRAYER, "الْحَمْدُ لِلَّهِ.", 33, Some("مسلم")),
                item("p5", AFTER_PRAYER, "اللَّهُ أَكْبَرُ.", 33, Some("مسلم")),
                item("p6", AFTER_PRAYER, AYAT_AL_KURSI, 1, Some("النسائي")),
            ],
        ),
        list(
            SLEEP,
            "أذكار النوم",
            "sleep_completed_v1",
            vec![
                item("s1", SLEEP, "بِاسْمِكَ اللَّهُمَّ أَمُوتُ وَأَحْيَا.", 1, Some("البخاري")),
                item(
                    "s2",
                    SLEEP,
                    "اللَّهُمَّ قِنِي عَذَابَكَ يَوْمَ تَبْعَثُ عِبَادَكَ.",
                    3,
                    Some("أبو داود والترمذي"),
                ),
                item("s3", SLEEP, AYAT_AL_KURSI, 1, Some("البخاري")),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn item_ids_are_unique_across_lists() {
        let lists = builtin_lists();
        let mut seen = HashSet::new();
        for list in &lists {
            for item in &list.items {
                assert!(seen.insert(item.id.clone()), "duplicate id {}", item.id);
                assert_eq!(item.category, list.key);
                assert!(item.count > 0);
            }
        }
    }
}
