//! Component and content payloads for the generated site.
//!
//! Templates are plain string constants with `__UPPERCASE__` interpolation
//! markers; `format!` is avoided here because JSX is brace-heavy.

use chrono::Local;

use crate::blog::{format_long_date, reading_time_minutes};
use crate::config::PortfolioConfig;

fn js_string_array(items: &[String]) -> String {
    let quoted: Vec<String> = items
        .iter()
        .map(|s| format!("'{}'", s.replace('\\', "\\\\").replace('\'', "\\'")))
        .collect();
    format!("[{}]", quoted.join(", "))
}

pub fn main_tsx() -> String {
    r#"import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';
import './styles/globals.css';

ReactDOM.createRoot(document.getElementById('root')!).render(
    <React.StrictMode>
        <App />
    </React.StrictMode>
);
"#
    .to_string()
}

const APP_TSX: &str = r#"import { useState, useEffect } from 'react';
import ThemeToggle from './components/ThemeToggle';
__IMPORTS__

function App() {
    const [darkMode, setDarkMode] = useState(true);

    useEffect(() => {
        const savedTheme = localStorage.getItem('theme');
        if (savedTheme) {
            setDarkMode(savedTheme === 'dark');
        }
    }, []);

    useEffect(() => {
        document.documentElement.classList.toggle('dark', darkMode);
        localStorage.setItem('theme', darkMode ? 'dark' : 'light');
    }, [darkMode]);

    return (
        <div className="min-h-screen bg-background text-foreground transition-colors duration-300">
            <ThemeToggle darkMode={darkMode} setDarkMode={setDarkMode} />
            <main>
__SECTIONS__
            </main>
        </div>
    );
}

export default App;
"#;

/// The app shell, importing only the sections the configuration enabled.
pub fn app_tsx(config: &PortfolioConfig) -> String {
    let mut components = vec!["Hero", "Projects"];
    if config.features.gallery {
        components.push("Gallery");
    }
    if config.features.testimonials {
        components.push("Testimonials");
    }
    if config.features.blog {
        components.push("Blog");
    }
    if config.features.contact_form {
        components.push("Contact");
    }
    components.push("Footer");

    let imports: Vec<String> = components
        .iter()
        .map(|c| format!("import {c} from './components/{c}';"))
        .collect();
    let sections: Vec<String> = components
        .iter()
        .map(|c| format!("                <{c} />"))
        .collect();

    APP_TSX
        .replace("__IMPORTS__", &imports.join("\n"))
        .replace("__SECTIONS__", &sections.join("\n"))
}

const HERO_TSX: &str = r##"const skills = __SKILLS__;

const Hero = () => {
    return (
        <section className="min-h-screen flex items-center justify-center px-4 py-20">
            <div className="max-w-4xl mx-auto text-center">
                <h1 className="text-4xl md:text-6xl font-bold mb-4 bg-gradient-to-r from-primary to-secondary bg-clip-text text-transparent animate-fade-in">
                    __NAME__
                </h1>
                <h2 className="text-xl md:text-2xl text-muted-foreground mb-6">
                    __ROLE__
                </h2>
                <p className="text-lg text-muted-foreground max-w-2xl mx-auto mb-8">
                    __BIO__
                </p>
                <div className="flex flex-wrap justify-center gap-3 mb-12 animate-slide-up">
                    {skills.map((skill) => (
                        <span
                            key={skill}
                            className="px-4 py-2 bg-muted rounded-full text-sm font-medium hover:bg-primary hover:text-background transition-colors"
                        >
                            {skill}
                        </span>
                    ))}
                </div>
                <div className="flex justify-center gap-4">
                    <a
                        href="#contact"
                        className="px-8 py-3 bg-primary text-background rounded-lg font-medium hover:opacity-90 transition-opacity"
                    >
                        Get in Touch
                    </a>
                    <a
                        href="#projects"
                        className="px-8 py-3 border border-primary text-primary rounded-lg font-medium hover:bg-primary hover:text-background transition-colors"
                    >
                        View Work
                    </a>
                </div>
            </div>
        </section>
    );
};

export default Hero;
"##;

pub fn hero_tsx(config: &PortfolioConfig) -> String {
    HERO_TSX
        .replace("__SKILLS__", &js_string_array(&config.skills))
        .replace("__NAME__", &config.profile.name)
        .replace("__ROLE__", &config.profile.role)
        .replace("__BIO__", &config.profile.bio)
}

pub fn projects_tsx() -> String {
    r#"import { ExternalLink, Github } from 'lucide-react';
import portfolio from '../config/portfolio.json';

interface ProjectEntry {
    name: string;
    description: string;
    tech: string[];
    repo_url?: string;
    demo_url?: string;
}

const projects = (portfolio.projects ?? []) as ProjectEntry[];

const Projects = () => {
    if (projects.length === 0) {
        return null;
    }

    return (
        <section id="projects" className="py-20 px-4">
            <div className="max-w-6xl mx-auto">
                <h2 className="text-3xl md:text-4xl font-bold mb-12 text-center">
                    Selected <span className="text-primary">Projects</span>
                </h2>
                <div className="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {projects.map((project) => (
                        <article
                            key={project.name}
                            className="bg-card border border-border rounded-lg p-6 hover:border-primary transition-colors"
                        >
                            <h3 className="text-xl font-bold mb-2">{project.name}</h3>
                            <p className="text-muted-foreground mb-4">{project.description}</p>
                            <div className="flex flex-wrap gap-2 mb-4">
                                {project.tech.map((tag) => (
                                    <span key={tag} className="px-3 py-1 bg-muted rounded-full text-xs">
                                        {tag}
                                    </span>
                                ))}
                            </div>
                            <div className="flex gap-4">
                                {project.repo_url && (
                                    <a href={project.repo_url} className="inline-flex items-center gap-1 text-primary hover:underline">
                                        <Github className="w-4 h-4" /> Source
                                    </a>
                                )}
                                {project.demo_url && (
                                    <a href={project.demo_url} className="inline-flex items-center gap-1 text-primary hover:underline">
                                        <ExternalLink className="w-4 h-4" /> Live Demo
                                    </a>
                                )}
                            </div>
                        </article>
                    ))}
                </div>
            </div>
        </section>
    );
};

export default Projects;
"#
    .to_string()
}

pub fn theme_toggle_tsx() -> String {
    r#"import { Sun, Moon } from 'lucide-react';

interface ThemeToggleProps {
    darkMode: boolean;
    setDarkMode: (value: boolean) => void;
}

const ThemeToggle = ({ darkMode, setDarkMode }: ThemeToggleProps) => {
    return (
        <button
            onClick={() => setDarkMode(!darkMode)}
            className="fixed top-6 right-6 z-50 p-3 rounded-full bg-muted hover:bg-primary transition-colors"
            aria-label="Toggle theme"
        >
            {darkMode ? (
                <Sun className="w-5 h-5 text-foreground" />
            ) : (
                <Moon className="w-5 h-5 text-foreground" />
            )}
        </button>
    );
};

export default ThemeToggle;
"#
    .to_string()
}

const FOOTER_TSX: &str = r#"import { Heart } from 'lucide-react';

const Footer = () => {
    const currentYear = new Date().getFullYear();

    return (
        <footer className="py-8 px-4 border-t border-border">
            <div className="max-w-4xl mx-auto text-center">
                <p className="text-muted-foreground flex items-center justify-center gap-2">
                    Made with <Heart className="w-4 h-4 text-red-500" /> by __NAME__
                </p>
                <p className="text-sm text-muted-foreground mt-2">
                    &copy; {currentYear} All rights reserved.
                </p>
            </div>
        </footer>
    );
};

export default Footer;
"#;

pub fn footer_tsx(config: &PortfolioConfig) -> String {
    FOOTER_TSX.replace("__NAME__", &config.profile.name)
}

pub fn gallery_tsx() -> String {
    r#"import { ExternalLink, Image } from 'lucide-react';

const galleryItems = [
    {
        id: 1,
        title: 'Project One',
        description: 'A showcase piece with attention to detail',
        link: '#',
    },
    {
        id: 2,
        title: 'Project Two',
        description: 'Exploration of color, motion, and layout',
        link: '#',
    },
    {
        id: 3,
        title: 'Project Three',
        description: 'An innovative solution with modern design',
        link: '#',
    },
    {
        id: 4,
        title: 'Project Four',
        description: 'Creative experimentation and iteration',
        link: '#',
    },
];

const Gallery = () => {
    return (
        <section id="gallery" className="py-20 px-4">
            <div className="max-w-6xl mx-auto">
                <div className="text-center mb-12">
                    <h2 className="text-3xl md:text-4xl font-bold mb-4">
                        My <span className="text-primary">Work</span>
                    </h2>
                    <p className="text-muted-foreground max-w-2xl mx-auto">
                        Explore my latest projects and creative endeavors
                    </p>
                </div>
                <div className="grid grid-cols-1 md:grid-cols-2 gap-6">
                    {galleryItems.map((item) => (
                        <div key={item.id} className="group relative bg-card border border-border rounded-lg overflow-hidden">
                            <div className="aspect-video bg-gradient-to-br from-primary/20 to-secondary/20 flex items-center justify-center">
                                <Image className="w-16 h-16 text-muted-foreground" />
                            </div>
                            <div className="p-6">
                                <h3 className="text-xl font-bold mb-2">{item.title}</h3>
                                <p className="text-muted-foreground mb-4">{item.description}</p>
                                <a href={item.link} className="inline-flex items-center gap-2 text-primary hover:underline">
                                    View Project <ExternalLink className="w-4 h-4" />
                                </a>
                            </div>
                        </div>
                    ))}
                </div>
            </div>
        </section>
    );
};

export default Gallery;
"#
    .to_string()
}

const CONTACT_TSX: &str = r#"import { useState } from 'react';
import { Send, Mail } from 'lucide-react';

const Contact = () => {
    const [formData, setFormData] = useState({ name: '', email: '', message: '' });
    const [submitted, setSubmitted] = useState(false);

    const handleSubmit = (e: React.FormEvent) => {
        e.preventDefault();
        setSubmitted(true);
        setFormData({ name: '', email: '', message: '' });
    };

    const handleChange = (e: React.ChangeEvent<HTMLInputElement | HTMLTextAreaElement>) => {
        setFormData((prev) => ({ ...prev, [e.target.name]: e.target.value }));
    };

    return (
        <section id="contact" className="py-20 px-4">
            <div className="max-w-4xl mx-auto">
                <div className="text-center mb-12">
                    <h2 className="text-3xl md:text-4xl font-bold mb-4">
                        Get in <span className="text-primary">Touch</span>
                    </h2>
                    <p className="text-muted-foreground flex items-center justify-center gap-2">
                        <Mail className="w-4 h-4" /> __EMAIL__
                    </p>
                </div>
                {submitted ? (
                    <p className="text-center text-primary font-medium">
                        Thank you for your message! I will get back to you soon.
                    </p>
                ) : (
                    <form onSubmit={handleSubmit} className="space-y-6 max-w-xl mx-auto">
                        <input
                            type="text"
                            name="name"
                            value={formData.name}
                            onChange={handleChange}
                            required
                            className="w-full px-4 py-3 bg-muted rounded-lg border border-border focus:border-primary focus:outline-none transition-colors"
                            placeholder="Your name"
                        />
                        <input
                            type="email"
                            name="email"
                            value={formData.email}
                            onChange={handleChange}
                            required
                            className="w-full px-4 py-3 bg-muted rounded-lg border border-border focus:border-primary focus:outline-none transition-colors"
                            placeholder="your@email.com"
                        />
                        <textarea
                            name="message"
                            value={formData.message}
                            onChange={handleChange}
                            required
                            rows={5}
                            className="w-full px-4 py-3 bg-muted rounded-lg border border-border focus:border-primary focus:outline-none transition-colors resize-none"
                            placeholder="Tell me about your project..."
                        />
                        <button
                            type="submit"
                            className="w-full py-3 bg-primary text-background rounded-lg font-medium hover:opacity-90 transition-opacity flex items-center justify-center gap-2"
                        >
                            Send Message <Send className="w-4 h-4" />
                        </button>
                    </form>
                )}
            </div>
        </section>
    );
};

export default Contact;
"#;

pub fn contact_tsx(config: &PortfolioConfig) -> String {
    CONTACT_TSX.replace("__EMAIL__", &config.profile.email)
}

pub fn testimonials_tsx() -> String {
    r#"import { Quote, Star } from 'lucide-react';

const testimonials = [
    {
        id: 1,
        name: 'Sarah Johnson',
        role: 'CEO, TechStart',
        content: 'Absolutely amazing work! The attention to detail exceeded our expectations.',
        rating: 5,
    },
    {
        id: 2,
        name: 'Michael Chen',
        role: 'Founder, DesignCo',
        content: 'A pleasure to work with. Delivered on time and the quality was outstanding.',
        rating: 5,
    },
    {
        id: 3,
        name: 'Emily Brown',
        role: 'Marketing Director',
        content: 'Creative, reliable, and truly understands client needs. Highly recommended!',
        rating: 5,
    },
];

const Testimonials = () => {
    return (
        <section id="testimonials" className="py-20 px-4 bg-muted/30">
            <div className="max-w-6xl mx-auto">
                <h2 className="text-3xl md:text-4xl font-bold mb-12 text-center">
                    What Clients <span className="text-primary">Say</span>
                </h2>
                <div className="grid md:grid-cols-3 gap-6">
                    {testimonials.map((testimonial) => (
                        <div key={testimonial.id} className="bg-card p-6 rounded-lg border border-border">
                            <Quote className="w-8 h-8 text-primary mb-4" />
                            <p className="text-muted-foreground mb-6 italic">
                                "{testimonial.content}"
                            </p>
                            <div className="flex items-center gap-1 mb-4">
                                {[...Array(testimonial.rating)].map((_, i) => (
                                    <Star key={i} className="w-4 h-4 fill-primary text-primary" />
                                ))}
                            </div>
                            <p className="font-bold">{testimonial.name}</p>
                            <p className="text-sm text-muted-foreground">{testimonial.role}</p>
                        </div>
                    ))}
                </div>
            </div>
        </section>
    );
};

export default Testimonials;
"#
    .to_string()
}

pub fn blog_tsx() -> String {
    r#"import { Calendar, Clock, ArrowRight } from 'lucide-react';
import { blogPosts, formatDate } from '../lib/blog';

const Blog = () => {
    return (
        <section id="blog" className="py-20 px-4">
            <div className="max-w-6xl mx-auto">
                <div className="text-center mb-12">
                    <h2 className="text-3xl md:text-4xl font-bold mb-4">
                        Latest <span className="text-primary">Articles</span>
                    </h2>
                    <p className="text-muted-foreground max-w-2xl mx-auto">
                        Thoughts, tutorials, and insights from my journey
                    </p>
                </div>
                <div className="grid md:grid-cols-3 gap-6">
                    {blogPosts.map((post) => (
                        <article
                            key={post.slug}
                            className="bg-card border border-border rounded-lg overflow-hidden hover:border-primary transition-colors"
                        >
                            <div className="p-6">
                                <div className="flex items-center gap-4 text-sm text-muted-foreground mb-4">
                                    <span className="flex items-center gap-1">
                                        <Calendar className="w-4 h-4" />
                                        {formatDate(post.date)}
                                    </span>
                                    <span className="flex items-center gap-1">
                                        <Clock className="w-4 h-4" />
                                        {post.readingTime}
                                    </span>
                                </div>
                                <h3 className="text-xl font-bold mb-3">{post.title}</h3>
                                <p className="text-muted-foreground mb-4">{post.excerpt}</p>
                                <a
                                    href={`/blog/${post.slug}`}
                                    className="inline-flex items-center gap-2 text-primary hover:underline font-medium"
                                >
                                    Read More <ArrowRight className="w-4 h-4" />
                                </a>
                            </div>
                        </article>
                    ))}
                </div>
            </div>
        </section>
    );
};

export default Blog;
"#
    .to_string()
}

const BLOG_LIB_TS: &str = r#"export interface BlogPost {
    slug: string;
    title: string;
    date: string;
    excerpt: string;
    readingTime: string;
    tags: string[];
}

export const blogPosts: BlogPost[] = [
    {
        slug: 'hello-world',
        title: 'Hello, World',
        date: '__DATE__',
        excerpt: 'The first post on this site: why it exists and what to expect here.',
        readingTime: '__READING_TIME__ min read',
        tags: ['welcome', 'intro'],
    },
];

export function formatDate(dateString: string): string {
    return new Date(dateString).toLocaleDateString('en-US', {
        year: 'numeric',
        month: 'long',
        day: 'numeric',
    });
}

export function getReadingTime(content: string): string {
    const wordsPerMinute = 200;
    const words = content.split(/\s+/).filter(Boolean).length;
    const minutes = Math.ceil(words / wordsPerMinute);
    return `${minutes} min read`;
}
"#;

const SEED_ARTICLE_BODY: &str = "Welcome to the blog. This site was scaffolded in seconds, but the \
words on it take longer, and that is the point: a portfolio is a living document, not a one-off \
artifact.\n\nOver the coming weeks this space will collect project write-ups, notes on tools and \
process, and the occasional longer essay. Posts live in the content directory as plain markdown \
with a small front-matter header, so adding one is as simple as creating a file.\n\nIf you are \
reading this as the site owner: replace this post with your own voice. Describe what you build, \
how you think, and what you want the next visitor to know about you. If you are a visitor: \
welcome, and check back soon.";

/// The seed markdown article. Its date is generation time and its reading
/// time is computed from the body at the fixed 200 words-per-minute rate.
pub fn seed_article_md() -> String {
    let today = Local::now().date_naive();
    format!(
        "---\ntitle: Hello, World\ndate: {date}\nreadingTime: {minutes} min read\ntags: welcome, intro\n---\n\n{body}\n\nPublished {long_date}.\n",
        date = today.format("%Y-%m-%d"),
        minutes = reading_time_minutes(SEED_ARTICLE_BODY),
        body = SEED_ARTICLE_BODY,
        long_date = format_long_date(today),
    )
}

pub fn blog_lib_ts() -> String {
    let today = Local::now().date_naive();
    BLOG_LIB_TS
        .replace("__DATE__", &today.format("%Y-%m-%d").to_string())
        .replace(
            "__READING_TIME__",
            &reading_time_minutes(SEED_ARTICLE_BODY).to_string(),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::defaults_for;

    #[test]
    fn test_app_tsx_includes_only_enabled_sections() {
        let mut config = defaults_for("modern-dark");
        config.features.blog = false;
        config.features.gallery = true;
        config.features.contact_form = true;
        config.features.testimonials = false;

        let app = app_tsx(&config);
        assert!(app.contains("import Hero from './components/Hero';"));
        assert!(app.contains("<Gallery />"));
        assert!(app.contains("<Contact />"));
        assert!(!app.contains("<Blog />"));
        assert!(!app.contains("<Testimonials />"));
        // Footer always closes the page
        assert!(app.contains("<Footer />"));
    }

    #[test]
    fn test_hero_interpolates_profile_and_skills() {
        let mut config = defaults_for("modern-dark");
        config.profile.name = "Ada Lovelace".to_string();
        config.skills = vec!["Rust".to_string(), "C'mon".to_string()];
        let hero = hero_tsx(&config);
        assert!(hero.contains("Ada Lovelace"));
        assert!(hero.contains("const skills = ['Rust', 'C\\'mon'];"));
        assert!(!hero.contains("__NAME__"));
    }

    #[test]
    fn test_contact_carries_email() {
        let config = defaults_for("modern-dark");
        let contact = contact_tsx(&config);
        assert!(contact.contains("hello@example.com"));
    }

    #[test]
    fn test_seed_article_reading_time_matches_body() {
        let article = seed_article_md();
        let expected = reading_time_minutes(SEED_ARTICLE_BODY);
        assert!(article.contains(&format!("readingTime: {expected} min read")));
        assert!(article.starts_with("---\ntitle: Hello, World\n"));
    }

    #[test]
    fn test_blog_lib_has_no_unreplaced_markers() {
        let lib = blog_lib_ts();
        assert!(!lib.contains("__DATE__"));
        assert!(!lib.contains("__READING_TIME__"));
        assert!(lib.contains("const wordsPerMinute = 200;"));
    }
}
