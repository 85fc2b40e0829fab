//! The authored timeline data.
//!
//! Records are listed in chronological order; tests over this table enforce
//! that ordering so the runtime never has to.

use std::path::PathBuf;

use super::MomentStore;
use crate::error::Result;
use crate::moment::{Diary, Moment, Tone};
use crate::timeline::parse_date;

struct Seed {
    date: &'static str,
    title: &'static str,
    subtext: Option<&'static str>,
    image: Option<&'static str>,
    theme: Option<Tone>,
    diary: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        date: "2022-04-24",
        title: "初次相遇",
        subtext: Some("春日的第一句你好"),
        image: None,
        theme: Some(Tone::Pink),
        diary: "那天下午的风很轻，图书馆门口的樱花刚落了一半。\n你抱着一摞书从台阶上下来，我鼓起勇气说了第一句你好。\n后来想想，所有的故事都是从那句普通的问候开始的。",
    },
    Seed {
        date: "2022-06-18",
        title: "第一次看海",
        subtext: None,
        image: Some("assets/photos/2022-06-18-sea.jpg"),
        theme: None,
        diary: "坐了四个小时的车去看海，到的时候正好赶上涨潮。\n你在沙滩上写下我们两个人的名字，浪一来就没了，你又写了一遍。\n回程的路上你睡着了，靠在我的肩膀上，我一动也不敢动。",
    },
    Seed {
        date: "2022-09-10",
        title: "异地的中秋",
        subtext: Some("月亮替我去看你"),
        image: None,
        theme: Some(Tone::Blue),
        diary: "第一个没能在一起过的节日。\n视频里你举着月饼对着镜头碰了一下，说这样就算一起吃过了。\n挂了电话以后我在阳台站了很久，月亮确实很圆。",
    },
    Seed {
        date: "2023-02-04",
        title: "再相遇",
        subtext: Some("立春，也是重逢"),
        image: None,
        theme: Some(Tone::Purple),
        diary: "车站出口的人很多，我一眼就看到了你。\n分开的那段日子谁都没有提，好像只是各自出了一趟远门。\n你说立春是一年的开始，那我们就从这天重新开始。",
    },
    Seed {
        date: "2023-05-20",
        title: "搬进小家",
        subtext: None,
        image: Some("assets/photos/2023-05-20-home.jpg"),
        theme: None,
        diary: "钥匙是下午拿到的，房子很小，阳台朝西。\n我们在空荡荡的客厅里吃了第一顿外卖，坐在纸箱上。\n你说以后这里的每一件东西都是我们一起挑的，我说好。",
    },
    Seed {
        date: "2024-02-14",
        title: "求婚",
        subtext: None,
        image: Some("assets/photos/2024-02-14-proposal.jpg"),
        theme: None,
        diary: "排练了很多遍的话，真到开口的时候全忘了。\n你哭着点头的样子我大概一辈子都忘不掉。\n戒指有一点点大，你说没关系，冬天戴刚刚好。",
    },
    Seed {
        date: "2024-11-23",
        title: "领证",
        subtext: Some("从今天起是一家人"),
        image: Some("assets/photos/2024-11-23-certificate.jpg"),
        theme: None,
        diary: "民政局九点开门，我们八点半就到了，排在第三对。\n照片拍了两次，第一次你笑得太用力了。\n出来的时候你把证举得高高的，像举着一张满分的试卷。",
    },
    Seed {
        date: "2025-01-01",
        title: "新年第一天",
        subtext: Some("往后每一年都一起跨"),
        image: None,
        theme: Some(Tone::Green),
        diary: "零点的时候窗外有人放烟花，我们挤在阳台上看。\n你说新的一年没有什么特别的愿望，平平安安就好。\n我在心里偷偷补了一句：还要一直在一起。",
    },
];

/// Build the store from the authored records.
///
/// # Errors
///
/// Fails when a seed date literal is malformed; the application refuses to
/// start rather than display wrong counters.
pub fn seed() -> Result<MomentStore> {
    let moments = SEEDS
        .iter()
        .map(|seed| {
            Ok(Moment {
                date: parse_date(seed.date)?,
                title: seed.title.to_string(),
                subtext: seed.subtext.map(str::to_string),
                image: seed.image.map(PathBuf::from),
                theme: seed.theme,
                diary: Diary::new(seed.diary),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    MomentStore::new(moments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milestone::MilestoneSet;

    #[test]
    fn test_seed_builds() {
        let store = seed().unwrap();
        assert_eq!(store.len(), 8);
    }

    #[test]
    fn test_seed_is_chronological() {
        let store = seed().unwrap();
        let dates: Vec<_> = store.iter().map(|m| m.date).collect();
        let mut sorted = dates.clone();
        sorted.sort();
        assert_eq!(dates, sorted, "seed records must be authored in date order");
    }

    #[test]
    fn test_seed_starts_at_first_meeting() {
        let store = seed().unwrap();
        let milestones = MilestoneSet::standard();
        assert_eq!(store.get(0).unwrap().date, milestones.first_meeting.date);
    }

    #[test]
    fn test_seed_contains_milestone_moments() {
        let store = seed().unwrap();
        let milestones = MilestoneSet::standard();
        for anchor in [milestones.reunion.date, milestones.marriage.date] {
            assert!(
                store.iter().any(|m| m.date == anchor),
                "no moment authored for milestone {anchor}"
            );
        }
    }

    #[test]
    fn test_seed_diaries_have_paragraphs() {
        let store = seed().unwrap();
        for moment in &store {
            assert!(
                moment.diary.paragraphs().count() > 0,
                "moment {} has an empty diary",
                moment.title
            );
        }
    }

    #[test]
    fn test_seed_theme_only_without_image() {
        // A tone is decoration for image-less cards; records with a photo
        // leave it unset.
        let store = seed().unwrap();
        for moment in &store {
            if moment.has_image() {
                assert!(moment.theme.is_none(), "moment {} sets both", moment.title);
            }
        }
    }
}
