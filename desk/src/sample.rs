//! Built-in sample datasets.
//!
//! The backend has no roster, score, or homework endpoints yet. The console
//! and CLI render these fixtures in their place, and the dashboard takes its
//! headline roster figures from here.

#[cfg(test)]
#[path = "sample_test.rs"]
mod sample_test;

use std::collections::BTreeMap;

use schema::{
    ExamScore, Homework, HomeworkKind, HomeworkTarget, Student, Submission, SubmissionStats,
    SubmissionStatus,
};

/// Enrolled students shown on the dashboard.
pub const TOTAL_STUDENTS: usize = 40;

/// Current cohort number shown on the dashboard.
pub const CURRENT_GENERATION: u32 = 3;

const STUDENT_NAMES: [&str; 13] = [
    "김기주", "김영탁", "김재원", "김종진", "김지수", "나승엽", "노영진", "명성규", "모시라",
    "박기헌", "박몽", "변태한", "백수연",
];

const TARGET_NAMES: [&str; 6] = ["김세실", "이나경", "이용균", "박기현", "김재원", "이용재"];

/// Exam roster.
#[must_use]
pub fn students() -> Vec<Student> {
    STUDENT_NAMES
        .iter()
        .zip(1..)
        .map(|(name, id)| Student { id, name: (*name).to_owned() })
        .collect()
}

fn question_map(scores: &[f64]) -> BTreeMap<u32, f64> {
    scores.iter().copied().zip(1..).map(|(score, n)| (n, score)).collect()
}

/// Score sheets for weekly exam `1`.
#[must_use]
pub fn exam_scores() -> Vec<ExamScore> {
    vec![
        ExamScore {
            id: 1,
            student_id: 1,
            student_name: "김기주".to_owned(),
            weekly_exam_id: 1,
            session1_scores: question_map(&[
                0.0, 6.0, 5.0, 4.0, 4.7, 4.9, 5.7, 5.4, 6.0, 4.0, 4.0, 2.0, 4.0,
            ]),
            session2_scores: question_map(&[13.9, 13.0, 14.5, 0.0, 0.0, 0.0]),
            session1_total: 46.7,
            session2_total: 41.4,
            total: 47.55,
        },
        ExamScore {
            id: 2,
            student_id: 2,
            student_name: "김영탁".to_owned(),
            weekly_exam_id: 1,
            session1_scores: question_map(&[
                0.0, 6.0, 6.0, 5.7, 5.7, 5.9, 0.0, 5.9, 0.0, 5.9, 5.9, 6.0, 6.0,
            ]),
            session2_scores: question_map(&[15.0, 15.0, 0.0, 14.9, 14.9, 0.0]),
            session1_total: 59.0,
            session2_total: 59.8,
            total: 59.4,
        },
    ]
}

/// Students homework can be assigned to.
#[must_use]
pub fn homework_targets() -> Vec<HomeworkTarget> {
    TARGET_NAMES
        .iter()
        .zip(1_u32..)
        .map(|(name, id)| HomeworkTarget { id: id.to_string(), name: (*name).to_owned() })
        .collect()
}

/// Assignments, one per kind.
#[must_use]
pub fn homeworks() -> Vec<Homework> {
    let targets = homework_targets();
    vec![
        Homework {
            id: "1".to_owned(),
            title: "프로토콜의 3요소에 대해 설명하세요".to_owned(),
            category: "네트워크".to_owned(),
            kind: HomeworkKind::Chapter,
            deadline: "2024-09-15".to_owned(),
            content: "<p>프로토콜의 3요소(구문, 의미, 타이밍)에 대해 각각의 의미와 특징을 설명하세요.</p>"
                .to_owned(),
            targets: targets[..4].to_vec(),
            created_at: "2024-09-01".to_owned(),
            submission_stats: SubmissionStats { total: 4, submitted: 3, pending: 1 },
        },
        Homework {
            id: "2".to_owned(),
            title: "1교시형) TCP와 UDP를 비교 설명하시오.".to_owned(),
            category: "네트워크".to_owned(),
            kind: HomeworkKind::SelfTest,
            deadline: "2024-09-20".to_owned(),
            content: "<p>TCP와 UDP 프로토콜의 특징, 장단점, 사용 용도를 비교하여 설명하시오.</p>"
                .to_owned(),
            targets,
            created_at: "2024-09-05".to_owned(),
            submission_stats: SubmissionStats { total: 6, submitted: 2, pending: 4 },
        },
    ]
}

fn submission(
    id: u32,
    homework_id: &str,
    target_name: &str,
    submitted_at: Option<&str>,
    status: SubmissionStatus,
) -> Submission {
    Submission {
        id: id.to_string(),
        homework_id: homework_id.to_owned(),
        target_name: target_name.to_owned(),
        submitted_at: submitted_at.map(str::to_owned),
        status,
        content: None,
    }
}

/// Submissions for both sample assignments.
#[must_use]
pub fn submissions() -> Vec<Submission> {
    use SubmissionStatus::{Late, Pending, Submitted};
    vec![
        submission(1, "1", "김세실", Some("2024-09-14"), Submitted),
        submission(2, "1", "이나경", Some("2024-09-13"), Submitted),
        submission(3, "1", "이용균", Some("2024-09-16"), Late),
        submission(4, "1", "박기현", None, Pending),
        submission(5, "2", "김세실", Some("2024-09-18"), Submitted),
        submission(6, "2", "이나경", Some("2024-09-19"), Submitted),
        submission(7, "2", "이용균", None, Pending),
        submission(8, "2", "박기현", None, Pending),
        submission(9, "2", "김재원", None, Pending),
        submission(10, "2", "이용재", None, Pending),
    ]
}
