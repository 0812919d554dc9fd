//! Email body templates
//!
//! HTML bodies with matching plain-text alternatives. Layout follows the
//! Forumus house style: a colored header band, a content card and a muted
//! footer.

use super::types::{ReportedPost, UserStatus};

/// Visual treatment of a status in the report email
pub struct StatusStyle {
    pub color: &'static str,
    pub badge_color: &'static str,
    pub message: &'static str,
}

pub fn status_style(status: UserStatus) -> StatusStyle {
    match status {
        UserStatus::Normal => StatusStyle {
            color: "#28a745",
            badge_color: "#d4edda",
            message: "Your account is in good standing.",
        },
        UserStatus::Reminded => StatusStyle {
            color: "#ffc107",
            badge_color: "#fff3cd",
            message: "You've received a reminder about community guidelines.",
        },
        UserStatus::Warned => StatusStyle {
            color: "#fd7e14",
            badge_color: "#ffe5d0",
            message: "Warning: Your account has been flagged for violating community guidelines.",
        },
        UserStatus::Banned => StatusStyle {
            color: "#dc3545",
            badge_color: "#f8d7da",
            message: "Your account has been banned due to multiple violations.",
        },
    }
}

pub fn otp_text(otp_code: &str) -> String {
    format!("Your Forumus verification code is: {}", otp_code)
}

pub fn otp_html(recipient_email: &str, otp_code: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <body style='font-family: Arial, sans-serif; background:#ffffff; padding:20px;'>
    <table width='100%' cellpadding='0' cellspacing='0' style='max-width: 600px; margin:auto; border:1px solid #e0e0e0; border-radius:8px;'>
      <tr>
        <td style='background:#4a64d8; padding:20px; text-align:center; color:white; font-size:22px; border-radius:8px 8px 0 0;'>
          Forumus Email Verification
        </td>
      </tr>
      <tr>
        <td style='padding:25px; color:#333; font-size:15px;'>
          <p style='margin:0 0 12px 0;'>Hi {recipient_email},</p>
          <p style='margin:0 0 12px 0;'>Use the verification code below to continue:</p>
          <p style='font-size:32px; margin:25px 0; text-align:center; font-weight:bold; color:#4a64d8;'>
            {otp_code}
          </p>
          <p style='margin:0 0 12px 0;'>This code expires in 5 minutes.</p>
          <p style='margin:0;'>If you didn't request this code, you can ignore this email.</p>
        </td>
      </tr>
      <tr>
        <td style='background:#f5f5f5; padding:15px; text-align:center; font-size:13px; color:#666; border-radius:0 0 8px 8px;'>
          Forumus - Learning Community
        </td>
      </tr>
    </table>
  </body>
</html>
"#
    )
}

pub fn welcome_text(user_name: &str) -> String {
    format!("Welcome to Forumus, {}!", user_name)
}

pub fn welcome_html(user_name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset='UTF-8'>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; border-radius: 10px 10px 0 0; }}
        .content {{ background: #f8f9fa; padding: 30px; border-radius: 0 0 10px 10px; }}
    </style>
</head>
<body>
    <div class='container'>
        <div class='header'>
            <h1>Welcome to Forumus!</h1>
        </div>
        <div class='content'>
            <p>Hi {user_name},</p>
            <p>Congratulations! Your email has been successfully verified and your Forumus account is now active.</p>
            <p>You can now:</p>
            <ul>
                <li>Join discussions and forums</li>
                <li>Ask questions and get answers</li>
                <li>Connect with students and teachers</li>
                <li>Share your knowledge with the community</li>
            </ul>
            <p>Welcome to the Forumus community!</p>
            <p>Best regards,<br>The Forumus Team</p>
        </div>
    </div>
</body>
</html>
"#
    )
}

pub fn report_text(user_name: &str, status: UserStatus) -> String {
    format!(
        "Dear {}, your Forumus account status is now {}. {}",
        user_name,
        status.as_str(),
        status_style(status).message
    )
}

pub fn report_html(user_name: &str, status: UserStatus, reported_posts: &[ReportedPost]) -> String {
    let style = status_style(status);
    let posts_html = reported_posts_html(reported_posts, style.color);

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset='UTF-8'>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; background: #f5f5f5; }}
        .container {{ max-width: 600px; margin: 0 auto; background: white; border-radius: 8px; overflow: hidden; }}
        .header {{ background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); color: white; padding: 30px; text-align: center; }}
        .content {{ padding: 30px; }}
        .status-badge {{ display: inline-block; padding: 10px 20px; border-radius: 20px; font-weight: bold; margin: 20px 0; }}
        .footer {{ background: #f8f9fa; padding: 20px; text-align: center; font-size: 13px; color: #666; }}
    </style>
</head>
<body>
    <div class='container'>
        <div class='header'>
            <h1>Account Status Update</h1>
        </div>
        <div class='content'>
            <p>Dear {user_name},</p>
            <p>We're writing to inform you about an update to your Forumus account status.</p>

            <div style='text-align: center; margin: 25px 0;'>
                <span class='status-badge' style='background: {badge}; color: {color}; border: 2px solid {color};'>
                    Status: {status}
                </span>
            </div>

            <p style='font-size: 15px; padding: 15px; background: {badge}; border-radius: 6px; border-left: 4px solid {color};'>
                {message}
            </p>

            {posts_html}

            <div style='margin-top: 25px; padding: 15px; background: #e9ecef; border-radius: 6px;'>
                <p style='margin: 0 0 10px 0; font-size: 14px;'><strong>What this means:</strong></p>
                <ul style='margin: 0; padding-left: 20px; font-size: 14px;'>
                    <li style='margin-bottom: 5px;'>Please review our community guidelines</li>
                    <li style='margin-bottom: 5px;'>Future violations may result in further action</li>
                    <li style='margin-bottom: 5px;'>Contact support if you have questions</li>
                </ul>
            </div>

            <p style='margin-top: 25px;'>If you believe this is a mistake, please contact our support team.</p>
            <p>Best regards,<br>The Forumus Team</p>
        </div>
        <div class='footer'>
            Forumus - Learning Community<br>
            This is an automated message, please do not reply directly to this email.
        </div>
    </div>
</body>
</html>
"#,
        user_name = user_name,
        badge = style.badge_color,
        color = style.color,
        status = status.as_str(),
        message = style.message,
        posts_html = posts_html,
    )
}

fn reported_posts_html(reported_posts: &[ReportedPost], accent_color: &str) -> String {
    if reported_posts.is_empty() {
        return String::new();
    }

    let mut html = String::from("<div style='margin-top: 20px;'>");
    html.push_str(
        "<h3 style='color: #333; font-size: 16px; margin-bottom: 15px;'>Reported Posts:</h3>",
    );

    for post in reported_posts {
        let title = post.title.as_deref().unwrap_or("Untitled Post");
        let reason = post.reason.as_deref().unwrap_or("Not specified");
        let date = post.date.as_deref().unwrap_or("Unknown date");

        html.push_str(&format!(
            "<div style='background: #f8f9fa; border-left: 4px solid {accent_color}; padding: 15px; margin-bottom: 10px; border-radius: 4px;'>\
             <p style='margin: 0 0 8px 0; font-weight: bold; color: #333;'>{title}</p>\
             <p style='margin: 0 0 5px 0; font-size: 14px; color: #666;'><strong>Reason:</strong> {reason}</p>\
             <p style='margin: 0; font-size: 13px; color: #999;'><strong>Date:</strong> {date}</p>\
             </div>"
        ));
    }

    html.push_str("</div>");
    html
}
