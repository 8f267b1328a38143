use common::model::post::BlogPost;
use common::model::testimonial::Testimonial;

use crate::context::SiteContext;

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AdminView {
    Dashboard,
    Testimonials,
    Blog,
    Settings,
}

#[derive(Clone, Copy)]
pub enum TestimonialField {
    Name,
    Title,
    Company,
    Quote,
    ResultBadge,
    PhotoUrl,
}

#[derive(Clone, Copy)]
pub enum PostField {
    Title,
    Author,
    Category,
    FeaturedImageUrl,
    Excerpt,
    Content,
    Status,
    ReadTime,
}

#[derive(Clone, Copy)]
pub enum SettingsField {
    SiteTitle,
    Tagline,
    ContactPhone,
    ContactEmail,
    OfficeAddress,
    BusinessHours,
    Linkedin,
    Twitter,
    Facebook,
    MetaDescription,
    Keywords,
    WebhookUrl,
    HeroHeadlineA,
    HeroHeadlineB,
    CtaTextA,
    CtaTextB,
}

pub enum Msg {
    SiteUpdated(SiteContext),
    PasswordInput(String),
    SubmitLogin,
    SetView(AdminView),

    NewTestimonial,
    EditTestimonial(Testimonial),
    TestimonialInput(TestimonialField, String),
    ToggleTestimonialActive,
    SaveTestimonial,
    CancelTestimonial,
    DeleteTestimonial(String),

    NewPost,
    EditPost(BlogPost),
    PostInput(PostField, String),
    SavePost,
    CancelPost,
    DeletePost(String),

    SettingsInput(SettingsField, String),
    SaveSettings,
}
