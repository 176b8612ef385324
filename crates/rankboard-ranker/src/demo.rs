//! Built-in demo datasets.

use chrono::NaiveDate;
use rankboard_common::{PerformanceEntry, Period, Project, ProjectStatus, Row};

// (id, name, team, completed, conversion_rate, avg_duration, qa_score, period)
type RowSpec = (u32, &'static str, &'static str, f64, f64, f64, f64, Period);

const INTERVIEWERS: &[RowSpec] = &[
    (1, "김하늘", "A", 124.0, 78.2, 18.3, 92.0, Period::Month),
    (2, "박지우", "A", 118.0, 83.1, 16.1, 88.0, Period::Month),
    (3, "이서준", "B", 53.0, 55.0, 22.5, 70.0, Period::Week),
    (4, "최민서", "C", 77.0, 61.3, 20.4, 75.0, Period::Day),
    (5, "홍가람", "B", 142.0, 88.2, 15.2, 95.0, Period::Month),
    (6, "정윤아", "C", 31.0, 49.8, 28.1, 60.0, Period::Day),
    (7, "신도윤", "A", 98.0, 72.4, 19.1, 81.0, Period::Week),
    (8, "문태양", "B", 11.0, 41.0, 35.3, 55.0, Period::Day),
    (9, "오세림", "C", 64.0, 63.0, 21.0, 78.0, Period::Week),
    (10, "한유진", "B", 150.0, 90.1, 14.8, 97.0, Period::Month),
    (11, "배지민", "A", 84.0, 68.8, 19.7, 80.0, Period::Month),
    (12, "서지안", "C", 25.0, 45.5, 29.9, 58.0, Period::Day),
    (13, "강서우", "B", 137.0, 84.6, 15.9, 93.0, Period::Month),
    (14, "임다은", "A", 45.0, 52.2, 24.8, 68.0, Period::Week),
    (15, "장하림", "C", 102.0, 74.9, 18.0, 85.0, Period::Month),
    (16, "김철수", "A", 95.0, 75.5, 17.2, 87.0, Period::Day),
    (17, "이영희", "B", 88.0, 82.3, 16.8, 89.0, Period::Day),
    (18, "박민수", "C", 72.0, 68.9, 19.5, 76.0, Period::Day),
    (19, "최수진", "A", 105.0, 79.1, 16.9, 91.0, Period::Week),
    (20, "정현우", "B", 92.0, 76.8, 18.1, 84.0, Period::Week),
    (21, "강미영", "C", 78.0, 71.2, 20.3, 79.0, Period::Week),
    (22, "윤태호", "A", 135.0, 85.4, 15.7, 94.0, Period::Month),
    (23, "송지은", "B", 128.0, 81.6, 16.3, 90.0, Period::Month),
    (24, "임동현", "C", 115.0, 77.8, 17.8, 86.0, Period::Month),
];

const PERFORMANCE: &[(&str, f64)] = &[
    ("김하늘", 18.3),
    ("박지우", 16.1),
    ("이서준", 22.5),
    ("최민서", 20.4),
    ("홍가람", 15.2),
    ("정윤아", 28.1),
    ("신도윤", 19.1),
    ("문태양", 35.3),
    ("오세림", 21.0),
    ("한유진", 14.8),
    ("배지민", 19.7),
    ("서지안", 29.9),
    ("강서우", 15.9),
    ("임다은", 24.8),
    ("장하림", 18.0),
    ("김철수", 17.2),
    ("이영희", 16.8),
    ("박민수", 19.5),
    ("최수진", 16.9),
    ("정현우", 18.1),
    ("강미영", 20.3),
    ("윤태호", 15.7),
    ("송지은", 16.3),
    ("임동현", 17.8),
];

// (id, name, created (y, m, d), members, progress, status)
type ProjectSpec = (u32, &'static str, (i32, u32, u32), &'static [&'static str], u8, ProjectStatus);

const PROJECTS: &[ProjectSpec] = &[
    (1, "주한 외국인 관광시장 실태조사", (2025, 1, 1), &["김하늘", "박지우"], 87, ProjectStatus::Success),
    (
        2,
        "경남 디자인주도 제조혁신 지원 사업 성과분석 및 만족도 전수조사 용역",
        (2025, 2, 15),
        &["이서준", "최민서"],
        47,
        ProjectStatus::InProgress,
    ),
    (3, "국내거주동포 실태 조사", (2025, 3, 3), &["홍가람"], 100, ProjectStatus::Success),
    (4, "서울시 디자인 수요조사", (2025, 3, 10), &["정윤아", "문태양"], 35, ProjectStatus::Delayed),
    (
        5,
        "신흥시장 항공산업 분석 및 방한여객 조사 용역",
        (2025, 4, 1),
        &["오세림", "한유진"],
        60,
        ProjectStatus::InProgress,
    ),
    (6, "2025년 디자인산업통계 조사 용역", (2025, 4, 15), &["신도윤", "배지민"], 25, ProjectStatus::InProgress),
    (7, "2025 관광안내소 서비스 모니터링 평가", (2025, 4, 20), &["강서우", "임다은"], 95, ProjectStatus::Success),
    (8, "2025년도 국가이미지 조사", (2025, 5, 1), &["장하림", "윤태호"], 15, ProjectStatus::Delayed),
];

pub fn interviewers() -> Vec<Row> {
    INTERVIEWERS
        .iter()
        .map(|&(interviewer_id, name, team, completed, conversion_rate, avg_duration, qa_score, period)| Row {
            interviewer_id,
            name: name.to_string(),
            team: team.to_string(),
            completed,
            conversion_rate,
            avg_duration,
            qa_score,
            period,
        })
        .collect()
}

pub fn performance() -> Vec<PerformanceEntry> {
    PERFORMANCE
        .iter()
        .map(|&(name, avg)| PerformanceEntry::new(name, avg))
        .collect()
}

pub fn projects() -> Vec<Project> {
    PROJECTS
        .iter()
        .filter_map(|&(id, name, (y, m, d), members, progress, status)| {
            // Dates above are literals; a bad one is a typo, not input.
            let created = NaiveDate::from_ymd_opt(y, m, d)?;
            Some(Project {
                id,
                name: name.to_string(),
                created,
                members: members.iter().map(|m| m.to_string()).collect(),
                progress,
                status,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(interviewers().len(), 24);
        assert_eq!(performance().len(), 24);
        assert_eq!(projects().len(), 8);
    }

    #[test]
    fn test_performance_names_are_unique() {
        let names: HashSet<String> = performance().into_iter().map(|e| e.name).collect();
        assert_eq!(names.len(), 24);
    }

    #[test]
    fn test_every_project_member_has_performance() {
        let names: HashSet<String> = performance().into_iter().map(|e| e.name).collect();
        for project in projects() {
            for member in &project.members {
                assert!(names.contains(member), "{} missing from cohort", member);
            }
        }
    }

    #[test]
    fn test_all_demo_metrics_finite() {
        for row in interviewers() {
            assert!(row.completed.is_finite() && row.avg_duration.is_finite());
        }
    }
}
