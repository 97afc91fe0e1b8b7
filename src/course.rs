//! Course identifier parsing and the static course URL table.

use std::fmt;

use crate::errors::NotifyError;

/// A parsed, structured course identifier.
///
/// Accepts the `course-v1:ORG+COURSE+RUN` form and the legacy
/// `ORG/COURSE/RUN` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseKey {
    org: String,
    course: String,
    run: String,
}

impl CourseKey {
    pub fn from_string(course_id: &str) -> Result<Self, NotifyError> {
        if let Some(rest) = course_id.strip_prefix("course-v1:") {
            return Self::from_parts(rest.split('+'), course_id);
        }
        if course_id.contains('/') {
            return Self::from_parts(course_id.split('/'), course_id);
        }
        Err(NotifyError::ParseError(format!(
            "unrecognized course id: {course_id}"
        )))
    }

    fn from_parts<'a>(
        mut parts: impl Iterator<Item = &'a str>,
        course_id: &str,
    ) -> Result<Self, NotifyError> {
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(org), Some(course), Some(run), None)
                if !org.is_empty() && !course.is_empty() && !run.is_empty() =>
            {
                Ok(Self {
                    org: org.to_string(),
                    course: course.to_string(),
                    run: run.to_string(),
                })
            }
            _ => Err(NotifyError::ParseError(format!(
                "malformed course id: {course_id}"
            ))),
        }
    }

    pub fn org(&self) -> &str {
        &self.org
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn run(&self) -> &str {
        &self.run
    }
}

impl fmt::Display for CourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "course-v1:{}+{}+{}", self.org, self.course, self.run)
    }
}

/// The five informational URLs attached to thread notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseUrls {
    pub course_home_url: &'static str,
    pub course_search_url: &'static str,
    pub forum_threads_url: &'static str,
    pub syllabus_url: &'static str,
    pub faq_url: &'static str,
}

const DEMO_COURSE_URLS: CourseUrls = CourseUrls {
    course_home_url: "/courses/course-v1:edX+DemoX+Demo_Course/course/",
    course_search_url: "/courses/course-v1:edX+DemoX+Demo_Course/search/",
    forum_threads_url: "/courses/course-v1:edX+DemoX+Demo_Course/discussion/forum/",
    syllabus_url: "/courses/course-v1:edX+DemoX+Demo_Course/syllabus/",
    faq_url: "/courses/course-v1:edX+DemoX+Demo_Course/faq/",
};

const DEFAULT_COURSE_URLS: CourseUrls = CourseUrls {
    course_home_url: "/dashboard",
    course_search_url: "/courses/search/",
    forum_threads_url: "/discussion/forum/",
    syllabus_url: "/support/syllabus/",
    faq_url: "/support/faq/",
};

/// Picks the URL tuple for a course.
///
/// The match is a naive substring check, not structural: any course id
/// containing `Demo` or `demo` anywhere is classified as the demo course.
pub fn get_course_urls(course_id: &str) -> CourseUrls {
    if course_id.contains("Demo") || course_id.contains("demo") {
        DEMO_COURSE_URLS
    } else {
        DEFAULT_COURSE_URLS
    }
}
