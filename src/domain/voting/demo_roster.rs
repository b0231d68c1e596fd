//! Demo roster loaded at startup when seeding is enabled.

use crate::domain::foundation::{SongId, Timestamp};

use super::{NewSong, Song, VotingError};

const AUDIO_BASE: &str = "https://res.cloudinary.com/dzwfuzxxw/video/upload";
const COVER_BASE: &str = "https://res.cloudinary.com/dzwfuzxxw/image/upload";

/// Preview clip used for songs that arrive without audio of their own.
pub const SAMPLE_AUDIO_REF: &str =
    "https://res.cloudinary.com/dzwfuzxxw/video/upload/v1748879303/sample_audio_preview.mp3";

/// 2024-01-01T00:00:00Z; seed songs are one day apart from here.
const FIRST_SEED_SECS: i64 = 1_704_067_200;
const DAY_SECS: i64 = 86_400;

struct Seed {
    id: &'static str,
    title: &'static str,
    artist: &'static str,
    album: &'static str,
    year: u16,
    votes: u32,
    audio: &'static str,
    cover: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "audioslave-cochise",
        title: "Cochise",
        artist: "Audioslave",
        album: "Audioslave",
        year: 2002,
        votes: 5,
        audio: "v1748878548/Audioslave_-_Cochise_HD_YymwGlbqzIc_lz8zjk.mp3",
        cover: "v1748897363/Audioslave-2002-capa-album-min_iicsnx.webp",
    },
    Seed {
        id: "deftones-change",
        title: "Change (In the House of Flies)",
        artist: "Deftones",
        album: "White Pony",
        year: 2000,
        votes: 8,
        audio: "v1748879300/Deftones_-_Change_In_The_House_Of_Flies_oSDNIINcK08_ejs6hn.mp3",
        cover: "v1748897364/Deftones-WhitePony_af94d8a7-be8b-41ea-8f62-8a6410ace2d2_vbfqyq.webp",
    },
    Seed {
        id: "qotsa-bronze",
        title: "The Bronze",
        artist: "Queens of the Stone Age",
        album: "Queens of the Stone Age",
        year: 1998,
        votes: 3,
        audio: "v1748879302/Queens_Of_The_Stone_Age_The_Bronze_P3kM58n2ceE_x9m9kx.mp3",
        cover: "v1748897363/61bu-cKoykL_nihmew.webp",
    },
    Seed {
        id: "deftones-my-own-summer",
        title: "My Own Summer (Shove It)",
        artist: "Deftones",
        album: "Around the Fur",
        year: 1997,
        votes: 6,
        audio: "v1748879303/Deftones_-_My_Own_Summer_vLjOwAPzt4o_xdemns.mp3",
        cover: "v1748897363/3e6814b457a9087e0c46d5a949de2766_ik37wx.webp",
    },
    Seed {
        id: "soundgarden-outshined",
        title: "Outshined",
        artist: "Soundgarden",
        album: "Badmotorfinger",
        year: 1991,
        votes: 2,
        audio: "v1748879304/Soundgarden_-_Outshined_Studio_Version_uLZBhlTXHuo_cfqaw1.mp3",
        cover: "v1748897364/71rRNAnVW6L_cpn09c.webp",
    },
    Seed {
        id: "qotsa-avon",
        title: "Avon",
        artist: "Queens of the Stone Age",
        album: "Lullabies to Paralyze",
        year: 2005,
        votes: 4,
        audio: "v1748893838/Queens_of_the_Stone_Age_-_Avon_Official_Audio_aimHMr-Ee4o_ay6jsw.mp3",
        cover: "",
    },
    Seed {
        id: "qotsa-if-only",
        title: "If Only",
        artist: "Queens of the Stone Age",
        album: "Lullabies to Paralyze",
        year: 2005,
        votes: 1,
        audio: "v1748893839/Queens_of_the_Stone_Age_-_If_Only_Official_Audio_1HqTh0nd9GE_rojfrl.mp3",
        cover: "",
    },
    Seed {
        id: "gorillaz-feel-good-inc",
        title: "Feel Good Inc.",
        artist: "Gorillaz",
        album: "Demon Days",
        year: 2005,
        votes: 7,
        audio: "v1748893840/Gorillaz_-_Feel_Good_Inc_Lyrics_IbpOfzrNjTY_cwzxnh.mp3",
        cover: "v1748897363/2025-06-02_17-48_adhnkt.png",
    },
    Seed {
        id: "rhcp-around-the-world",
        title: "Around The World",
        artist: "Red Hot Chili Peppers",
        album: "Californication",
        year: 1999,
        votes: 9,
        audio: "v1748893841/Red_Hot_Chili_Peppers_-_Around_The_World_Official_Music_Video_HD_UPGRADE_a9eNQZbjpJk_d2oido.mp3",
        cover: "v1748897364/304b3f84-9c1f-4620-bd1d-60d6d63ff7fc_fgs0hh.webp",
    },
    Seed {
        id: "gorillaz-dare",
        title: "DARE",
        artist: "Gorillaz",
        album: "Demon Days",
        year: 2005,
        votes: 3,
        audio: "v1748893841/DARE_rIq6i4-8Nww_hfwl3r.mp3",
        cover: "v1748897363/2025-06-02_17-48_adhnkt.png",
    },
    Seed {
        id: "soundgarden-black-hole-sun",
        title: "Black Hole Sun",
        artist: "Soundgarden",
        album: "Superunknown",
        year: 1994,
        votes: 6,
        audio: "v1748893842/Soundgarden_-_Black_Hole_Sun_HQ_Y6Kz6aXsBSs_lvcs9q.mp3",
        cover: "v1748897363/soundgarden-superunknown_rvcxuo.webp",
    },
];

/// The seed songs, oldest first. Songs without a hosted cover are left for
/// cover enrichment.
pub fn demo_roster() -> Result<Vec<Song>, VotingError> {
    SEEDS
        .iter()
        .enumerate()
        .map(|(day, seed)| {
            let mut new = NewSong::new(
                seed.title,
                seed.artist,
                format!("{}/{}", AUDIO_BASE, seed.audio),
            )
            .with_id(SongId::new(seed.id)?)
            .with_album(seed.album)
            .with_year(seed.year)
            .with_votes(seed.votes);
            if !seed.cover.is_empty() {
                new = new.with_cover(format!("{}/{}", COVER_BASE, seed.cover));
            }
            Song::admit(
                new,
                Timestamp::from_unix_secs(FIRST_SEED_SECS + day as i64 * DAY_SECS),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::voting::{SongStore, VoteLedger, DEFAULT_MAX_SONGS};

    #[test]
    fn demo_roster_fits_default_bound() {
        let songs = demo_roster().unwrap();
        assert_eq!(songs.len(), 11);
        assert!(songs.len() <= DEFAULT_MAX_SONGS);
    }

    #[test]
    fn demo_roster_is_oldest_first() {
        let songs = demo_roster().unwrap();
        assert!(songs
            .windows(2)
            .all(|pair| pair[0].added_at().is_before(&pair[1].added_at())));
    }

    #[test]
    fn demo_leader_is_most_voted_seed() {
        let ledger = VoteLedger::new(SongStore::restore(
            DEFAULT_MAX_SONGS,
            demo_roster().unwrap(),
        ));
        assert_eq!(ledger.leader().unwrap().id().as_str(), "rhcp-around-the-world");
    }
}
