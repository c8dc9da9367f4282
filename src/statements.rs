//! The fixed migration sequence for the guest-mode schema fix.
//!
//! Order matters: tables before their indexes, schema objects before the
//! seed rows that reference them. Each statement carries its own idempotence
//! guard (`IF NOT EXISTS` / `ON CONFLICT`), so rerunning the whole list is
//! safe even when parts of the schema already exist.

pub const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS guest_profiles (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        guest_token TEXT UNIQUE NOT NULL,
        user_type TEXT DEFAULT 'guest' CHECK (user_type IN ('student', 'teacher', 'alumni', 'guest')),
        full_name TEXT,
        avatar_url TEXT,
        school TEXT,
        major TEXT,
        graduation_year INTEGER,
        bio TEXT,
        is_public BOOLEAN DEFAULT true,
        is_guest BOOLEAN DEFAULT true,
        converted_to_user_id UUID,
        converted_at TIMESTAMP WITH TIME ZONE,
        created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
        updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
    );
    "#,
    "CREATE INDEX IF NOT EXISTS idx_guest_profiles_token ON guest_profiles(guest_token);",
    "CREATE INDEX IF NOT EXISTS idx_guest_profiles_converted ON guest_profiles(converted_to_user_id);",
    r#"
    ALTER TABLE profiles
    ADD COLUMN IF NOT EXISTS is_guest BOOLEAN DEFAULT false,
    ADD COLUMN IF NOT EXISTS guest_token TEXT,
    ADD COLUMN IF NOT EXISTS converted_to_user_id UUID,
    ADD COLUMN IF NOT EXISTS converted_at TIMESTAMP WITH TIME ZONE;
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS skills (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        category TEXT NOT NULL,
        description TEXT,
        level_required INTEGER DEFAULT 1,
        market_demand INTEGER DEFAULT 0,
        prerequisites TEXT[] DEFAULT '{}',
        difficulty_level INTEGER DEFAULT 1,
        learning_resources TEXT[] DEFAULT '{}',
        estimated_learning_time INTEGER DEFAULT 0,
        icon TEXT,
        created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_skills (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID,
        skill_id UUID,
        level INTEGER DEFAULT 1,
        score INTEGER DEFAULT 0,
        verified BOOLEAN DEFAULT false,
        created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
        updated_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS questions (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        skill_id UUID,
        question_text TEXT NOT NULL,
        options TEXT NOT NULL,
        correct_answer TEXT NOT NULL,
        difficulty INTEGER DEFAULT 1,
        is_approved BOOLEAN DEFAULT false,
        created_by UUID,
        created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS badges (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name TEXT NOT NULL,
        description TEXT,
        icon_url TEXT,
        skill_id UUID,
        rarity TEXT DEFAULT 'common' CHECK (rarity IN ('common', 'rare', 'epic', 'legendary')),
        requirement_score INTEGER,
        created_at TIMESTAMP WITH TIME ZONE DEFAULT NOW()
    );
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS user_badges (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        user_id UUID,
        badge_id UUID,
        earned_at TIMESTAMP WITH TIME ZONE DEFAULT NOW(),
        UNIQUE(user_id, badge_id)
    );
    "#,
    r#"
    INSERT INTO skills (name, category, description, level_required, market_demand, difficulty_level)
    VALUES
    ('JavaScript', 'Programming Language', 'Core language of web front-end development', 1, 95, 2),
    ('React', 'Front-end Framework', 'Popular front-end UI library', 2, 90, 3),
    ('Python', 'Programming Language', 'General-purpose programming language', 1, 90, 2),
    ('UI Design', 'Design', 'User interface design', 1, 75, 2)
    ON CONFLICT (name) DO NOTHING;
    "#,
    r#"
    INSERT INTO questions (skill_id, question_text, options, correct_answer, difficulty, is_approved)
    SELECT
        s.id,
        'Basic knowledge check for ' || s.name,
        '{"A": "Option A", "B": "Option B", "C": "Option C", "D": "Option D"}',
        'A',
        1,
        true
    FROM skills s
    WHERE s.name IN ('JavaScript', 'React', 'Python', 'UI Design')
    AND NOT EXISTS (
        SELECT 1 FROM questions q
        JOIN skills s2 ON q.skill_id = s2.id
        WHERE s2.name = s.name
    );
    "#,
    r#"
    INSERT INTO badges (name, description, rarity, requirement_score) VALUES
    ('First Steps', 'Completed the first sign-in', 'common', 10),
    ('Brave Attempt', 'Finished a first skill assessment', 'common', 20),
    ('Skill Adept', 'Passed any skill assessment', 'rare', 50),
    ('Fast Learner', 'Finished an assessment within five minutes', 'rare', 30)
    ON CONFLICT (name) DO NOTHING;
    "#,
];
