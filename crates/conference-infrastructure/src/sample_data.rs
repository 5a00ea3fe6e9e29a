//! Bundled sample conference used to seed repositories.
//!
//! Mirrors the youth conference weekend the mobile app ships with: one
//! event schedule of four sessions, five speakers and the season's events.

use chrono::{DateTime, TimeZone, Utc};
use std::collections::BTreeMap;

use conference_core::event::{ConferenceEvent, EventStatus};
use conference_core::session::Session;
use conference_core::speaker::Speaker;

const MAIN_EVENT_ID: &str = "event_1";

fn july_20(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 7, 20, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn links(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(platform, url)| (platform.to_string(), url.to_string()))
        .collect()
}

pub fn sample_sessions() -> Vec<Session> {
    let session = |id: &str,
                   title: &str,
                   description: &str,
                   start: DateTime<Utc>,
                   end: DateTime<Utc>,
                   location: &str,
                   speaker: &str| {
        let mut session = Session::new(id, title, start, end, location);
        session.description = description.to_string();
        session.event_id = Some(MAIN_EVENT_ID.to_string());
        session.speaker_ids = strings(&[speaker]);
        session
    };

    let mut opening = session(
        "session_1",
        "Opening Ceremony",
        "Welcome to the conference and kick-off of the weekend.",
        july_20(9, 0),
        july_20(10, 0),
        "Main Auditorium",
        "speaker_1",
    );
    opening.capacity = Some(500);
    opening.registered_count = 342;

    let mut leadership = session(
        "session_2",
        "Youth Leadership Workshop",
        "Hands-on leadership skills with practical group exercises.",
        july_20(10, 30),
        july_20(12, 0),
        "Conference Room A",
        "speaker_2",
    );
    leadership.capacity = Some(100);
    leadership.registered_count = 89;
    leadership.is_workshop = true;
    leadership.requires_registration = true;

    let mut worship = session(
        "session_3",
        "Music & Worship",
        "Interactive worship session with contemporary music.",
        july_20(14, 0),
        july_20(15, 30),
        "Chapel",
        "speaker_3",
    );
    worship.capacity = Some(300);
    worship.registered_count = 267;

    let mut life_skills = session(
        "session_4",
        "Life Skills for Teens",
        "Practical skills for the step into adulthood.",
        july_20(16, 0),
        july_20(17, 30),
        "Conference Room B",
        "speaker_4",
    );
    life_skills.capacity = Some(80);
    life_skills.registered_count = 67;
    life_skills.is_workshop = true;
    life_skills.requires_registration = true;

    vec![opening, leadership, worship, life_skills]
}

pub fn sample_speakers() -> Vec<Speaker> {
    let speaker = |id: &str,
                   name: &str,
                   title: &str,
                   organization: &str,
                   email: &str,
                   bio: &str,
                   expertise: &[&str],
                   social: &[(&str, &str)]| Speaker {
        id: id.to_string(),
        name: name.to_string(),
        bio: bio.to_string(),
        title: title.to_string(),
        organization: organization.to_string(),
        email: email.to_string(),
        profile_image_url: None,
        social_links: links(social),
        expertise: strings(expertise),
    };

    vec![
        speaker(
            "speaker_1",
            "Pastor John Smith",
            "Senior Pastor",
            "Louisville Community Church",
            "john.smith@lcc.org",
            "Fifteen years in youth ministry, focused on developing young leaders.",
            &["Youth Ministry", "Leadership Development", "Biblical Teaching"],
            &[
                ("linkedin", "https://linkedin.com/in/johnsmith"),
                ("website", "https://johnsmithministries.com"),
            ],
        ),
        speaker(
            "speaker_2",
            "Sarah Johnson",
            "Youth Director",
            "Faith Baptist Church",
            "sarah.johnson@faithbaptist.org",
            "Leads youth conferences across Kentucky with practical workshops.",
            &["Leadership Training", "Event Planning", "Team Building"],
            &[("linkedin", "https://linkedin.com/in/sarahjohnson")],
        ),
        speaker(
            "speaker_3",
            "David Wilson",
            "Worship Leader",
            "Grace Fellowship",
            "david.wilson@gracefellowship.org",
            "Worship leader and songwriter who regularly plays youth events.",
            &["Worship Leading", "Songwriting", "Audio Production"],
            &[("youtube", "https://youtube.com/@davidwilsonmusic")],
        ),
        speaker(
            "speaker_4",
            "Dr. Emily Davis",
            "Licensed Counselor",
            "Hope Counseling Center",
            "emily.davis@hopecounseling.org",
            "Clinical psychologist specialized in adolescent counseling.",
            &["Adolescent Psychology", "Mental Health", "Crisis Intervention"],
            &[("website", "https://hopecounselingcenter.org")],
        ),
        speaker(
            "speaker_5",
            "Michael Thompson",
            "Youth Pastor",
            "Crossroads Community Church",
            "mike.thompson@crossroads.org",
            "Runs mission trips and community outreach programs.",
            &["Community Service", "Mission Work", "Youth Mentoring"],
            &[("twitter", "@mikethompsoncc")],
        ),
    ]
}

pub fn sample_events() -> Vec<ConferenceEvent> {
    let event = |id: &str,
                 name: &str,
                 dates: (&str, &str),
                 location: &str,
                 capacity: u32,
                 registered: u32,
                 status: EventStatus,
                 organizer: &str,
                 deadline: &str,
                 tags: &[&str]| {
        let mut event = ConferenceEvent::new(id, name, dates.0, dates.1, location, capacity);
        event.registered_attendees = registered;
        event.status = status;
        event.organizer_id = Some(organizer.to_string());
        event.registration_deadline = Some(deadline.to_string());
        event.tags = strings(tags);
        event
    };

    vec![
        event(
            MAIN_EVENT_ID,
            "Louisville Youth Group Conference 2024",
            ("2024-07-20", "2024-07-22"),
            "Louisville Convention Center",
            500,
            342,
            EventStatus::Active,
            "org_1",
            "2024-07-15",
            &["youth", "conference", "worship"],
        ),
        event(
            "event_2",
            "Summer Youth Retreat",
            ("2024-08-15", "2024-08-17"),
            "Camp Crossroads",
            150,
            89,
            EventStatus::Active,
            "org_2",
            "2024-08-10",
            &["retreat", "summer", "camp"],
        ),
        event(
            "event_3",
            "Fall Leadership Summit",
            ("2024-10-12", "2024-10-13"),
            "Faith Community Center",
            100,
            23,
            EventStatus::Active,
            "org_1",
            "2024-10-05",
            &["leadership", "training", "mentorship"],
        ),
        event(
            "event_4",
            "Christmas Youth Celebration",
            ("2024-12-21", "2024-12-21"),
            "Grace Fellowship Hall",
            200,
            0,
            EventStatus::Draft,
            "org_3",
            "2024-12-15",
            &["christmas", "celebration", "holiday"],
        ),
        event(
            "event_5",
            "Spring Mission Trip Prep",
            ("2025-02-28", "2025-03-01"),
            "Crossroads Community Church",
            75,
            0,
            EventStatus::Draft,
            "org_2",
            "2025-02-20",
            &["mission", "preparation", "spring"],
        ),
    ]
}
