use crate::content::domain::entities::{
    AboutContent, ExperienceEntry, Link, Metric, PageMeta, PortfolioContent, Profile, Project,
    Skill, SkillCategory,
};

const SUMMARY: &str = "Hello! I'm Austine Lomocso, a passionate and dedicated 3rd-year Computer Science student.

As a developer, I've built a strong proficiency in core languages like C++, Java, and Python. My technical skills extend to full-stack development, where I'm comfortable building robust backend systems with Spring Boot and crafting dynamic, end-to-end applications using the MERN (MongoDB, Express.js, React, Node.js) stack. I also have experience leveraging modern frontend tools like Vite to create fast and efficient user interfaces.

Beyond my CS coursework, I currently work as a Math tutor, where I help students from elementary through high school grasp complex concepts. This role has significantly sharpened my ability to communicate clearly and break down difficult problems into simple, understandable steps.

I thrive in collaborative environments and am known for being a cooperative and engaging team member. I'm always eager to learn, contribute, and tackle new challenges in the world of technology.";

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn category(name: &str, skills: &[(&str, i32)]) -> SkillCategory {
    SkillCategory {
        name: name.to_string(),
        skills: skills
            .iter()
            .map(|(name, level)| Skill {
                name: name.to_string(),
                level: *level,
            })
            .collect(),
    }
}

/// The hand-authored portfolio content served by the app.
pub fn authored_content() -> PortfolioContent {
    PortfolioContent {
        page: PageMeta {
            title: "Austine Lomocso | Digital Portfolio".to_string(),
            icon: "🤖".to_string(),
        },
        profile: Profile {
            name: "Austine Lomocso".to_string(),
            title: "Full-Stack Developer & Godot Enthusiast".to_string(),
            profile_pic_url: "/assets/profile-pic.jpg".to_string(),
        },
        links: vec![
            Link {
                platform: "LinkedIn".to_string(),
                url: "https://www.linkedin.com/in/austine-lomocso-bb1448255/".to_string(),
            },
            Link {
                platform: "GitHub".to_string(),
                url: "https://github.com/ero-s".to_string(),
            },
        ],
        about: AboutContent {
            summary: SUMMARY.to_string(),
            metrics: vec![
                Metric {
                    label: "Years of Experience".to_string(),
                    value: "3".to_string(),
                },
                Metric {
                    label: "Projects Completed".to_string(),
                    value: "3".to_string(),
                },
                Metric {
                    label: "Programming Languages".to_string(),
                    value: "5".to_string(),
                },
            ],
        },
        skills: vec![
            category(
                "Backend",
                &[
                    ("Python & Django", 95),
                    ("Java & Spring Boot", 90),
                    ("Node.js & Express", 80),
                    ("Databases (PostgreSQL, MySQL, MongoDB)", 85),
                ],
            ),
            category(
                "Frontend",
                &[
                    ("React.js", 95),
                    ("JavaScript (ES6+)", 90),
                    ("HTML5 & CSS3", 90),
                    ("Material-UI & Bootstrap", 80),
                ],
            ),
            category(
                "Game Development",
                &[
                    ("Godot Engine & GDScript", 85),
                    ("C# (for Godot)", 75),
                    ("Game Design Principles", 70),
                ],
            ),
            category(
                "Tools & DevOps",
                &[
                    ("Git & GitHub", 95),
                    ("Docker & CI/CD", 70),
                    ("AWS & Heroku", 65),
                ],
            ),
        ],
        projects: vec![
            Project {
                title: "Planomatik - Event Management System".to_string(),
                description: "A full-stack Django application for organizing and managing large-scale events. Features include user auth, event scheduling, and a REST API for mobile integration.".to_string(),
                technologies: strings(&[
                    "Python",
                    "Django",
                    "Django REST Framework",
                    "PostgreSQL",
                    "React",
                ]),
                image_url: "https://placehold.co/600x400/000000/FFFFFF/png?text=Planomatik"
                    .to_string(),
                repo_url: "https://github.com/BrentTolentino/Planomatilk".to_string(),
            },
            Project {
                title: "BlueHire".to_string(),
                description: "A realtime localized job hunting app for blue-collar workers looking for job opportunities, Spring Security for auth, and Stripe integration for payments.".to_string(),
                technologies: strings(&[
                    "Java",
                    "Spring Boot",
                    "Spring Security",
                    "JPA/Hibernate",
                    "MySQL",
                ]),
                image_url: "https://placehold.co/600x400/3C4F76/FFFFFF/png?text=BlueHire"
                    .to_string(),
                repo_url: "https://github.com/ero-s/BlueHire".to_string(),
            },
            Project {
                title: "Clean And Respond".to_string(),
                description: "A 2D Indie platformer game developed in Godot. Features custom physics, state machine for character controls, and a procedurally generated level system.".to_string(),
                technologies: strings(&["Godot Engine", "GDScript", "Aseprite"]),
                image_url:
                    "https://placehold.co/600x400/822E81/FFFFFF/png?text=Clean+and+Respond+(Godot)"
                        .to_string(),
                repo_url: "https://github.com/Pinghtdog/Clean-And-Respond".to_string(),
            },
        ],
        experience: vec![
            ExperienceEntry {
                role: "Full-Stack Developer".to_string(),
                company: "CodeBlooded".to_string(),
                period: "2023 - Present".to_string(),
                details: strings(&[
                    "Led the development of a high-traffic React and Spring Boot application.",
                ]),
            },
            ExperienceEntry {
                role: "Math Tutor".to_string(),
                company: "Brighterly".to_string(),
                period: "Present".to_string(),
                details: strings(&[
                    "Aiding kids of wide ranges of ages in Math classes through online one-on-one tutoring sessions",
                ]),
            },
        ],
    }
}
